//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `repositories/` - Resource store persistence
//! - `events/` - Event sinks (console, NDJSON)

pub mod events;
pub mod fs;
pub mod repositories;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use repositories::{
    ResourceStoreRepository, ResxResourceRepository, StoreFormat, TomlResourceRepository,
};
