//! Generate Options
//!
//! Configuration types for generate operations.

use std::path::PathBuf;

use crate::domain::services::DEFAULT_VALUE;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Raw tokens: `<namespace> <class> [-resx path] [-in ...] [-out ...]`
    pub tokens: Vec<String>,
    /// Store used when the tokens carry no `-resx` path
    pub resource_path: Option<PathBuf>,
    /// Value written for missing keys
    pub default_value: String,
    /// Directory of the generated file
    pub output_dir: PathBuf,
    /// Extension of the generated file
    pub extension: String,
    /// Dry run (don't write store or file)
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            resource_path: None,
            default_value: DEFAULT_VALUE.to_string(),
            output_dir: PathBuf::from("."),
            extension: "cs".to_string(),
            dry_run: false,
        }
    }

    pub fn with_resource_path(mut self, path: Option<PathBuf>) -> Self {
        self.resource_path = path;
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
