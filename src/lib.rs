//! # mehrwert
//!
//! Customer-aware VAT (MwSt) calculation and invoice dispatch.
//!
//! An [`Invoice`] is either an internal charge settled between departments or
//! an external invoice sent to a [`Customer`]. The tax policy is a single
//! decision table over the closed set of customer kinds: private customers
//! always pay the standard rate, business customers pay it only when they are
//! not input-tax deductible (vorsteuerabzugsberechtigt).
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use mehrwert::core::*;
//! use mehrwert::dispatch::{ConsoleLedger, ConsoleMailer, Dispatch, process_invoice};
//! use mehrwert::vat::calculate_tax;
//! use rust_decimal_macros::dec;
//!
//! let customer = Customer::business("adesso SE", "billing@adesso.de", false);
//! assert_eq!(calculate_tax(&customer, dec!(100)), dec!(10.0));
//!
//! let invoice = Invoice::external(customer, dec!(100));
//! let outcome = process_invoice(&invoice, &mut ConsoleLedger, &mut ConsoleMailer).unwrap();
//! assert_eq!(outcome, Dispatch::Sent);
//! ```

pub mod core;
pub mod dispatch;
pub mod vat;

// Re-export core types at crate root for convenience
pub use crate::core::*;
