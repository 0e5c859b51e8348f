use crate::core::{DispatchError, Invoice};
use crate::dispatch::format::format_invoice_text;
use crate::dispatch::sinks::{LedgerSink, MailTransport};
use crate::vat::calculate_tax;

/// Terminal outcome of processing a single invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Internal charge recorded in the ledger.
    Recorded,
    /// Notification delivered to the customer's address.
    Sent,
}

/// Route one invoice to the correct downstream channel.
///
/// Internal charges go straight to `ledger`. External invoices get their
/// VAT computed, the notification text rendered, and the result delivered
/// via `mail`. Each call is independent; the router holds no state across
/// invoices and invokes exactly one collaborator per call.
///
/// A collaborator failure aborts the current invoice and propagates to the
/// caller unchanged.
pub fn process_invoice(
    invoice: &Invoice,
    ledger: &mut impl LedgerSink,
    mail: &mut impl MailTransport,
) -> Result<Dispatch, DispatchError> {
    match invoice {
        Invoice::Internal { department, amount } => {
            ledger.record_internal_charge(department, *amount)?;
            Ok(Dispatch::Recorded)
        }
        Invoice::External { customer, amount } => {
            let tax = calculate_tax(customer, *amount);
            let message = format_invoice_text(customer.name(), *amount, tax);
            mail.send_notification(customer.mail(), &message)?;
            Ok(Dispatch::Sent)
        }
    }
}
