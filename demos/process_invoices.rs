use mehrwert::core::{Customer, Invoice, validate_invoice};
use mehrwert::dispatch::{ConsoleLedger, ConsoleMailer, process_invoice};
use rust_decimal_macros::dec;

fn main() {
    let invoices = vec![
        Invoice::internal("HR", dec!(10)),
        Invoice::external(Customer::business("adesso SE", "", false), dec!(10)),
        Invoice::external(Customer::business("Euregio JUG", "", true), dec!(10)),
        Invoice::external(Customer::private("Merlin", ""), dec!(10)),
    ];

    println!("Behandle Rechnungen");
    let mut ledger = ConsoleLedger;
    let mut mailer = ConsoleMailer;

    for invoice in &invoices {
        for finding in validate_invoice(invoice) {
            println!("Hinweis: {finding}");
        }
        match process_invoice(invoice, &mut ledger, &mut mailer) {
            Ok(outcome) => println!("-> {outcome:?}"),
            Err(err) => eprintln!("Fehler: {err}"),
        }
    }
}
