//! Domain Services
//!
//! Stateless business logic:
//!
//! - `partitioner` - token stream to argument groups
//! - `synchronizer` - required localization keys into a resource store
//! - `renderer` - class spec to source text

pub mod partitioner;
pub mod renderer;
pub mod synchronizer;

pub use partitioner::{
    is_marker, parse_invocation, ArgumentGroups, ArgumentPartitioner, Invocation,
    ResourceArgument,
};
pub use renderer::{output_file_name, CompilationUnit, RenderStyle, TemplateRenderer};
pub use synchronizer::{
    ensure_key, required_keys, synchronize, EnsureOutcome, KeyRecord, KeyRequest, KeyStatus,
    SyncReport, DEFAULT_VALUE,
};
