//! TOML Resource Store Repository
//!
//! Implements the ResourceRepository port using an ordered TOML array of
//! tables:
//!
//! ```toml
//! [[entry]]
//! key = "EchoDisplayName"
//! value = "myvalue"
//! comment = "activity name"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ResourceEntry, ResourceStore};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::resource_repository::{
    ResourceRepository, ResourceStoreError, ResourceStoreResult,
};
use crate::infrastructure::fs::LocalFs;

/// TOML-based resource store repository
pub struct TomlResourceRepository {
    fs: LocalFs,
}

impl TomlResourceRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }

    /// Parse store content
    pub fn parse(content: &str, path: &Path) -> ResourceStoreResult<ResourceStore> {
        let file: TomlResourceFile =
            toml::from_str(content).map_err(|e| ResourceStoreError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(ResourceStore::from_entries(
            file.entries
                .into_iter()
                .map(|e| ResourceEntry::new(e.key, e.value).with_comment(e.comment))
                .collect(),
        ))
    }

    /// Serialize a store
    pub fn serialize(store: &ResourceStore) -> ResourceStoreResult<String> {
        let file = TomlResourceFile {
            entries: store
                .entries()
                .iter()
                .map(|e| TomlEntry {
                    key: e.key().to_string(),
                    value: e.value().to_string(),
                    comment: e.comment().map(|c| c.to_string()),
                })
                .collect(),
        };

        toml::to_string_pretty(&file).map_err(|e| ResourceStoreError::Serialize(e.to_string()))
    }
}

impl Default for TomlResourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// TOML representation of one entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlEntry {
    key: String,
    #[serde(default)]
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

/// TOML representation of the store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TomlResourceFile {
    #[serde(default, rename = "entry", skip_serializing_if = "Vec::is_empty")]
    entries: Vec<TomlEntry>,
}

impl ResourceRepository for TomlResourceRepository {
    fn load(&self, path: &Path) -> ResourceStoreResult<ResourceStore> {
        let content = self.fs.read(path).map_err(|e| match e {
            FsError::NotFound(_) => ResourceStoreError::NotFound(path.to_path_buf()),
            other => ResourceStoreError::Io {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })?;

        Self::parse(&content, path)
    }

    fn save(&self, store: &ResourceStore, path: &Path) -> ResourceStoreResult<()> {
        let content = Self::serialize(store)?;
        self.fs
            .write(path, &content)
            .map_err(|e| ResourceStoreError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> ResourceStore {
        ResourceStore::from_entries(vec![
            ResourceEntry::new("Zeta", "last letter").with_comment(Some("keep me".to_string())),
            ResourceEntry::new("Alpha", "first letter"),
            ResourceEntry::new("Blank", ""),
        ])
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Resources.toml");

        let err = TomlResourceRepository::new().load(&path).unwrap_err();

        assert!(matches!(err, ResourceStoreError::NotFound(p) if p == path));
    }

    #[test]
    fn empty_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Resources.toml");
        std::fs::write(&path, "").unwrap();

        let store = TomlResourceRepository::new().load(&path).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn save_and_load_preserves_order_and_comments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Resources.toml");
        let repo = TomlResourceRepository::new();

        repo.save(&sample(), &path).unwrap();
        let loaded = repo.load(&path).unwrap();

        assert_eq!(loaded, sample());
        let keys: Vec<_> = loaded.keys().collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Blank"]);
    }

    #[test]
    fn duplicate_keys_survive_a_rewrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Resources.toml");
        let repo = TomlResourceRepository::new();
        let store = ResourceStore::from_entries(vec![
            ResourceEntry::new("K", ""),
            ResourceEntry::new("K", "myvalue"),
        ]);

        repo.save(&store, &path).unwrap();

        assert_eq!(repo.load(&path).unwrap().len(), 2);
    }

    #[test]
    fn toml_format_is_human_readable() {
        let content = TomlResourceRepository::serialize(&sample()).unwrap();

        assert!(content.contains("[[entry]]"));
        assert!(content.contains("key = \"Zeta\""));
        assert!(content.contains("comment = \"keep me\""));
        assert_eq!(content.matches("comment =").count(), 1);
    }

    #[test]
    fn serialization_is_stable() {
        let first = TomlResourceRepository::serialize(&sample()).unwrap();
        let reparsed = TomlResourceRepository::parse(&first, Path::new("r.toml")).unwrap();
        let second = TomlResourceRepository::serialize(&reparsed).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_value_defaults_to_blank() {
        let content = r#"
[[entry]]
key = "OnlyKey"
"#;
        let store = TomlResourceRepository::parse(content, Path::new("r.toml")).unwrap();

        assert!(store.get("OnlyKey").unwrap().is_blank());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = TomlResourceRepository::parse("[[entry]\nkey =", Path::new("r.toml")).unwrap_err();
        assert!(matches!(err, ResourceStoreError::Parse { .. }));
    }
}
