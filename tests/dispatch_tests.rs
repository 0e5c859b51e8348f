use mehrwert::core::{Customer, DispatchError, Invoice};
use mehrwert::dispatch::{Dispatch, LedgerSink, MailTransport, process_invoice};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Default)]
struct LedgerSpy {
    charges: Vec<(String, Decimal)>,
    fail: bool,
}

impl LedgerSink for LedgerSpy {
    fn record_internal_charge(
        &mut self,
        department: &str,
        amount: Decimal,
    ) -> Result<(), DispatchError> {
        if self.fail {
            return Err(DispatchError::Ledger("ledger offline".into()));
        }
        self.charges.push((department.into(), amount));
        Ok(())
    }
}

#[derive(Default)]
struct MailSpy {
    sent: Vec<(String, String)>,
    fail: bool,
}

impl MailTransport for MailSpy {
    fn send_notification(&mut self, address: &str, message: &str) -> Result<(), DispatchError> {
        if self.fail {
            return Err(DispatchError::Notify("mailer offline".into()));
        }
        self.sent.push((address.into(), message.into()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[test]
fn internal_charge_goes_to_ledger_only() {
    let mut ledger = LedgerSpy::default();
    let mut mail = MailSpy::default();

    let outcome = process_invoice(&Invoice::internal("HR", dec!(10)), &mut ledger, &mut mail)
        .unwrap();

    assert_eq!(outcome, Dispatch::Recorded);
    assert_eq!(ledger.charges, vec![("HR".to_string(), dec!(10))]);
    assert!(mail.sent.is_empty());
}

#[test]
fn external_invoice_goes_to_mail_only() {
    let mut ledger = LedgerSpy::default();
    let mut mail = MailSpy::default();
    let invoice = Invoice::external(Customer::private("Merlin", ""), dec!(10));

    let outcome = process_invoice(&invoice, &mut ledger, &mut mail).unwrap();

    assert_eq!(outcome, Dispatch::Sent);
    assert!(ledger.charges.is_empty());
    assert_eq!(mail.sent.len(), 1);

    let (address, message) = &mail.sent[0];
    assert_eq!(address, "");
    assert!(message.contains("Merlin"));
    assert!(message.contains("10.00"));
    assert!(message.contains("1.00"));
}

#[test]
fn deductible_business_notified_with_zero_tax() {
    let mut ledger = LedgerSpy::default();
    let mut mail = MailSpy::default();
    let customer = Customer::business("Euregio JUG", "orga@jug.de", true);

    process_invoice(&Invoice::external(customer, dec!(10)), &mut ledger, &mut mail).unwrap();

    let (address, message) = &mail.sent[0];
    assert_eq!(address, "orga@jug.de");
    assert!(message.contains("10.00€ plus 0.00€ MwSt"));
}

// ---------------------------------------------------------------------------
// Failure semantics
// ---------------------------------------------------------------------------

#[test]
fn ledger_failure_propagates() {
    let mut ledger = LedgerSpy {
        fail: true,
        ..LedgerSpy::default()
    };
    let mut mail = MailSpy::default();

    let err = process_invoice(&Invoice::internal("HR", dec!(10)), &mut ledger, &mut mail)
        .unwrap_err();

    assert!(matches!(err, DispatchError::Ledger(_)));
    assert!(mail.sent.is_empty());
}

#[test]
fn mail_failure_propagates() {
    let mut ledger = LedgerSpy::default();
    let mut mail = MailSpy {
        fail: true,
        ..MailSpy::default()
    };
    let invoice = Invoice::external(Customer::private("Merlin", ""), dec!(10));

    let err = process_invoice(&invoice, &mut ledger, &mut mail).unwrap_err();

    assert!(matches!(err, DispatchError::Notify(_)));
    assert!(ledger.charges.is_empty());
}

// ---------------------------------------------------------------------------
// Batches are independent invoices
// ---------------------------------------------------------------------------

#[test]
fn batch_processes_each_invoice_independently() {
    let mut ledger = LedgerSpy::default();
    let mut mail = MailSpy::default();
    let invoices = vec![
        Invoice::internal("HR", dec!(10)),
        Invoice::external(Customer::business("adesso SE", "", false), dec!(10)),
        Invoice::external(Customer::business("Euregio JUG", "", true), dec!(10)),
        Invoice::external(Customer::private("Merlin", ""), dec!(10)),
    ];

    for invoice in &invoices {
        process_invoice(invoice, &mut ledger, &mut mail).unwrap();
    }

    assert_eq!(ledger.charges.len(), 1);
    assert_eq!(mail.sent.len(), 3);
}

#[test]
fn failing_item_leaves_rest_of_batch_unaffected() {
    let mut ledger = LedgerSpy::default();
    let mut mail = MailSpy {
        fail: true,
        ..MailSpy::default()
    };
    let invoices = vec![
        Invoice::internal("HR", dec!(10)),
        Invoice::external(Customer::private("Merlin", ""), dec!(10)),
    ];

    // Broken mailer: the internal charge still lands, only the send fails
    let results: Vec<_> = invoices
        .iter()
        .map(|i| process_invoice(i, &mut ledger, &mut mail))
        .collect();

    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert_eq!(ledger.charges.len(), 1);
    assert!(mail.sent.is_empty());
}
