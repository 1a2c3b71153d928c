//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use actgen::presentation::factory;
//!
//! let use_case = factory::create_generate_use_case(&config);
//! let result = use_case.execute(&options);
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::create_generate_use_case;
