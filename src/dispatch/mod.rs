//! Invoice routing to bookkeeping or mail dispatch.
//!
//! [`process_invoice`] classifies an invoice and forwards it to exactly one
//! of two collaborators: internal charges go to a [`LedgerSink`], external
//! invoices get their VAT computed, a notification text rendered, and the
//! result handed to a [`MailTransport`]. Collaborator failures propagate
//! untouched — no retry, no partial send.

mod format;
mod router;
mod sinks;

pub use format::format_invoice_text;
pub use router::{Dispatch, process_invoice};
pub use sinks::{ConsoleLedger, ConsoleMailer, LedgerSink, MailTransport};
