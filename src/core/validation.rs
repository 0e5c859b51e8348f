//! Advisory invoice validation.
//!
//! Findings never block processing: a negative amount is still valid
//! arithmetic input for the tax calculator, and the router delivers to an
//! empty address if asked to. Callers that want stricter behavior check
//! the findings before dispatching.

use rust_decimal::Decimal;

use crate::core::{Invoice, ValidationError};

/// Check an invoice for suspicious but non-fatal conditions.
///
/// Returns an empty vector if nothing was found.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.amount() < Decimal::ZERO {
        errors.push(ValidationError::new(
            "amount",
            format!("negative invoice amount {}", invoice.amount()),
        ));
    }

    match invoice {
        Invoice::Internal { department, .. } => {
            if department.trim().is_empty() {
                errors.push(ValidationError::new(
                    "department",
                    "internal charge without a department",
                ));
            }
        }
        Invoice::External { customer, .. } => {
            if customer.mail().trim().is_empty() {
                errors.push(ValidationError::new(
                    "customer.mail",
                    "external invoice without a recipient address",
                ));
            }
        }
    }

    errors
}
