//! Error types for actgen
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, ResourceStoreError};

/// Result type alias for actgen operations
pub type ActgenResult<T> = Result<T, ActgenError>;

/// Main error type for actgen operations
#[derive(Error, Debug)]
pub enum ActgenError {
    /// A required positional argument or flag value is missing
    #[error("missing required argument: {name}")]
    MissingArgument { name: &'static str },

    /// Resource store could not be loaded or saved
    #[error(transparent)]
    ResourceStore(#[from] ResourceStoreError),

    /// Generated file could not be written
    #[error("failed to write {path}: {source}")]
    Fs {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
