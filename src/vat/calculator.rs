use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::Customer;

/// Standard VAT rate applied to non-deductible invoices.
pub const STANDARD_RATE: Decimal = dec!(0.10);

/// Compute the VAT amount for `customer` on an invoice of `amount`.
///
/// - Private customers always pay [`STANDARD_RATE`].
/// - Business customers pay nothing when input-tax deductible,
///   otherwise [`STANDARD_RATE`].
///
/// The customer's name and mail never influence the result. Pure and
/// deterministic; safe to call from any number of threads.
pub fn calculate_tax(customer: &Customer, amount: Decimal) -> Decimal {
    match customer {
        Customer::Business {
            input_tax_deductible: true,
            ..
        } => Decimal::ZERO,
        Customer::Business { .. } | Customer::Private { .. } => amount * STANDARD_RATE,
    }
}
