use rust_decimal::Decimal;

/// Render the notification text for an external invoice.
///
/// Fixed German template; both currency values are formatted to exactly
/// two decimal places. Purely deterministic string construction.
pub fn format_invoice_text(name: &str, amount: Decimal, tax: Decimal) -> String {
    format!(
        "Hallo {name},\n\
         bitte senden Sie uns den Rechnungsbetrag in Höhe von {amount:.2}€ plus {tax:.2}€ MwSt.\n\
         \n\
         Mit freundlichen Grüßen\n\
         Ihre Buchhaltung"
    )
}
