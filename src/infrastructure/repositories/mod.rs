//! Repository Implementations
//!
//! Concrete implementations of domain repository ports. The store format is
//! picked from the file extension: `.resx` files are ResX XML, anything else
//! is the TOML entry list.

mod resource_store;
mod resx;

use std::path::Path;

pub use resource_store::TomlResourceRepository;
pub use resx::ResxResourceRepository;

use crate::domain::entities::ResourceStore;
use crate::domain::ports::resource_repository::{ResourceRepository, ResourceStoreResult};

/// On-disk format of a resource store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Toml,
    Resx,
}

impl StoreFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("resx") => StoreFormat::Resx,
            _ => StoreFormat::Toml,
        }
    }
}

/// Repository that delegates to the format matching each path
#[derive(Default)]
pub struct ResourceStoreRepository {
    toml: TomlResourceRepository,
    resx: ResxResourceRepository,
}

impl ResourceStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn for_path(&self, path: &Path) -> &dyn ResourceRepository {
        match StoreFormat::from_path(path) {
            StoreFormat::Toml => &self.toml,
            StoreFormat::Resx => &self.resx,
        }
    }
}

impl ResourceRepository for ResourceStoreRepository {
    fn load(&self, path: &Path) -> ResourceStoreResult<ResourceStore> {
        self.for_path(path).load(path)
    }

    fn save(&self, store: &ResourceStore, path: &Path) -> ResourceStoreResult<()> {
        self.for_path(path).save(store, path)
    }
}
