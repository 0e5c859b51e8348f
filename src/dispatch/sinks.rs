use rust_decimal::Decimal;

use crate::core::DispatchError;

/// Records internal charges for cross-department settlement.
///
/// Supplied by the surrounding application; a production implementation
/// would write to the bookkeeping system.
pub trait LedgerSink {
    /// Record `amount` against `department`.
    fn record_internal_charge(
        &mut self,
        department: &str,
        amount: Decimal,
    ) -> Result<(), DispatchError>;
}

/// Delivers a notification text to an external contact.
pub trait MailTransport {
    /// Deliver `message` to `address`.
    fn send_notification(&mut self, address: &str, message: &str) -> Result<(), DispatchError>;
}

/// Ledger stub that prints to stdout and always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLedger;

impl LedgerSink for ConsoleLedger {
    fn record_internal_charge(
        &mut self,
        department: &str,
        amount: Decimal,
    ) -> Result<(), DispatchError> {
        println!("Speichere {amount:.2}€ zur Verrechnung mit Abteilung {department}");
        Ok(())
    }
}

/// Mail stub that prints to stdout and always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMailer;

impl MailTransport for ConsoleMailer {
    fn send_notification(&mut self, address: &str, message: &str) -> Result<(), DispatchError> {
        println!("Sende E-Mail an {address} mit Inhalt:\n{message}");
        Ok(())
    }
}
