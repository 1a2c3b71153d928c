//! Domain Layer
//!
//! Pure logic of actgen, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - ClassSpec, ResourceStore
//! - `value_objects/` - Direction, localization key naming
//! - `services/` - Partitioner, Synchronizer, Renderer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services take snapshots and return new ones
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
