//! Core domain types, errors, and validation.
//!
//! The customer and invoice models are closed enums: adding a variant
//! breaks every dispatch site at compile time.

mod error;
mod types;
mod validation;

pub use error::*;
pub use types::*;
pub use validation::*;
