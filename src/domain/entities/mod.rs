//! Domain Entities
//!
//! - `ClassSpec` / `ArgumentSpec` - the class to generate
//! - `ResourceStore` / `ResourceEntry` - ordered localization entries

mod class_spec;
mod resource_store;

pub use class_spec::{ArgumentSpec, ClassSpec};
pub use resource_store::{ResourceEntry, ResourceStore};
