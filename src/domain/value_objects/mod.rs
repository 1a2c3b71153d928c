//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod direction;
pub mod localization_key;

pub use direction::Direction;
pub use localization_key::{description_key, display_name_key, KeyOwner};
