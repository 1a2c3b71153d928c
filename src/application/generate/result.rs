//! Generate Result

use std::path::PathBuf;

use crate::domain::services::{KeyRecord, KeyStatus};

/// Result of a generate operation
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    pub namespace_name: String,
    pub class_name: String,
    /// Where the generated source goes (not written in dry-run mode)
    pub output_path: PathBuf,
    /// Rendered source text
    pub content: String,
    /// Resource store that was synchronized, if any
    pub resource_path: Option<PathBuf>,
    /// One record per required key, in request order
    pub records: Vec<KeyRecord>,
    /// Tokens between the class name and the first marker
    pub ignored_tokens: Vec<String>,
    pub dry_run: bool,
}

impl GenerateResult {
    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.keys_with(KeyStatus::Added)
    }

    pub fn found(&self) -> impl Iterator<Item = &str> {
        self.keys_with(KeyStatus::Found)
    }

    pub fn added_count(&self) -> usize {
        self.added().count()
    }

    pub fn found_count(&self) -> usize {
        self.found().count()
    }

    pub fn synchronized(&self) -> bool {
        self.resource_path.is_some()
    }

    fn keys_with(&self, status: KeyStatus) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(move |r| r.status == status)
            .map(|r| r.key.as_str())
    }
}
