//! actgen - activity class scaffold generator
//!
//! actgen turns a short token list (`<namespace> <class> [-resx path]
//! [-in ids...] [-out ids...]`) into the source text of an activity class and
//! keeps a localization resource store in sync with the keys that class
//! references. Existing translations are never overwritten; missing keys are
//! appended at the end of the store.
//!
//! ## Layers
//!
//! - `domain` - partitioning, key synchronization and rendering (pure)
//! - `application` - the generate use case
//! - `infrastructure` - ResX and TOML stores, local file system, event sinks
//! - `presentation` - CLI, factory and output rendering
//! - `config` - layered configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::{Config, Verbosity};
pub use domain::entities::{ArgumentSpec, ClassSpec, ResourceEntry, ResourceStore};
pub use domain::services::{
    ensure_key, parse_invocation, synchronize, ArgumentPartitioner, KeyRequest, TemplateRenderer,
};
pub use error::{ActgenError, ActgenResult};
