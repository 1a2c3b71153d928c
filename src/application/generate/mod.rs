//! Generate Use Case
//!
//! Turns one token list into a synchronized resource store and a generated
//! activity source file.

mod options;
mod result;
mod use_case;


pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;
