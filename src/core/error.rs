use thiserror::Error;

/// Errors that can occur while dispatching an invoice.
///
/// The tax calculation itself cannot fail: the customer parameter is
/// non-optional and the customer set is a closed enum, so the "missing or
/// unknown customer" failure mode of a dynamically-checked port does not
/// exist here. What remains are collaborator failures, which propagate to
/// the caller untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// The internal-charge ledger rejected the record.
    #[error("ledger error: {0}")]
    Ledger(String),

    /// The notification transport failed to deliver.
    #[error("notification error: {0}")]
    Notify(String),
}

/// A single validation finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "customer.mail").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation finding.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
