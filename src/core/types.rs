use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer, private or business — the closed set the tax policy
/// dispatches over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Customer {
    /// Privatkunde — a private individual.
    Private {
        /// Display name used in the notification text.
        name: String,
        /// Contact address the notification is delivered to.
        mail: String,
    },
    /// Businesskunde — a company, possibly input-tax deductible.
    Business {
        /// Display name used in the notification text.
        name: String,
        /// Contact address the notification is delivered to.
        mail: String,
        /// Vorsteuerabzugsberechtigt — eligible for zero VAT.
        input_tax_deductible: bool,
    },
}

impl Customer {
    /// Create a private customer.
    pub fn private(name: impl Into<String>, mail: impl Into<String>) -> Self {
        Self::Private {
            name: name.into(),
            mail: mail.into(),
        }
    }

    /// Create a business customer.
    pub fn business(
        name: impl Into<String>,
        mail: impl Into<String>,
        input_tax_deductible: bool,
    ) -> Self {
        Self::Business {
            name: name.into(),
            mail: mail.into(),
            input_tax_deductible,
        }
    }

    /// The customer's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Private { name, .. } | Self::Business { name, .. } => name,
        }
    }

    /// The customer's contact address.
    pub fn mail(&self) -> &str {
        match self {
            Self::Private { mail, .. } | Self::Business { mail, .. } => mail,
        }
    }
}

/// An invoice, routed either to internal bookkeeping or to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Invoice {
    /// InterneVerrechnung — settled between departments, never sent out.
    Internal {
        /// Department the amount is settled against.
        department: String,
        /// Invoice amount (net).
        amount: Decimal,
    },
    /// ExternVersandt — sent to a customer via the notification channel.
    External {
        /// Recipient of the invoice.
        customer: Customer,
        /// Invoice amount (net, before VAT).
        amount: Decimal,
    },
}

impl Invoice {
    /// Create an internal charge.
    pub fn internal(department: impl Into<String>, amount: Decimal) -> Self {
        Self::Internal {
            department: department.into(),
            amount,
        }
    }

    /// Create an external invoice addressed to `customer`.
    pub fn external(customer: Customer, amount: Decimal) -> Self {
        Self::External { customer, amount }
    }

    /// The invoice amount, independent of routing.
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Internal { amount, .. } | Self::External { amount, .. } => *amount,
        }
    }
}
