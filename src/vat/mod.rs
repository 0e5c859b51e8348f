//! VAT (MwSt) calculation per customer category.
//!
//! The entire business policy is one decision table: private customers pay
//! the standard rate, business customers pay it only when not input-tax
//! deductible.
//!
//! # Example
//!
//! ```rust
//! use mehrwert::core::Customer;
//! use mehrwert::vat::{STANDARD_RATE, calculate_tax};
//! use rust_decimal_macros::dec;
//!
//! let merlin = Customer::private("Merlin", "merlin@dummy.de");
//! assert_eq!(calculate_tax(&merlin, dec!(500)), dec!(500) * STANDARD_RATE);
//!
//! let jug = Customer::business("Euregio JUG", "", true);
//! assert_eq!(calculate_tax(&jug, dec!(500)), dec!(0));
//! ```

mod calculator;

pub use calculator::{STANDARD_RATE, calculate_tax};
