//! ResourceRepository port - abstraction for resource store persistence
//!
//! The domain works on `ResourceStore` snapshots. This trait loads one from a
//! path and persists one back as a complete rewrite.

use std::path::{Path, PathBuf};

use crate::domain::entities::ResourceStore;

/// Result type for resource store operations
pub type ResourceStoreResult<T> = Result<T, ResourceStoreError>;

/// Resource store operation errors
#[derive(Debug)]
pub enum ResourceStoreError {
    /// The store file does not exist
    NotFound(PathBuf),
    /// The store file could not be parsed
    Parse { path: PathBuf, message: String },
    /// The store could not be serialized
    Serialize(String),
    /// Read or write failure
    Io { path: PathBuf, message: String },
}

impl std::fmt::Display for ResourceStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStoreError::NotFound(path) => {
                write!(f, "resource store not found: {}", path.display())
            }
            ResourceStoreError::Parse { path, message } => {
                write!(f, "invalid resource store {}: {}", path.display(), message)
            }
            ResourceStoreError::Serialize(message) => {
                write!(f, "failed to serialize resource store: {}", message)
            }
            ResourceStoreError::Io { path, message } => {
                write!(f, "resource store I/O error at {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ResourceStoreError {}

/// Abstract repository for resource store persistence
pub trait ResourceRepository {
    /// Load every entry, in file order
    fn load(&self, path: &Path) -> ResourceStoreResult<ResourceStore>;

    /// Replace the store content with `store`
    fn save(&self, store: &ResourceStore, path: &Path) -> ResourceStoreResult<()>;
}
