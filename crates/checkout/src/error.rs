//! Errors surfaced by collaborators and the call sites that use them.

use rust_decimal::Decimal;
use shopkit_core::{CurrencyCode, EmailError};
use thiserror::Error;

/// A collaborator could not answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The collaborator is unreachable or refused the request.
    #[error("{service} unavailable: {reason}")]
    Unavailable {
        /// Collaborator name, e.g. `"payments"`.
        service: &'static str,
        reason: String,
    },

    /// No exchange rate is known for the currency pair.
    #[error("no exchange rate for {from} -> {to}")]
    MissingRate { from: CurrencyCode, to: CurrencyCode },

    /// A converted amount is too large to represent.
    #[error("converting {amount} to {to} overflows")]
    Overflow { amount: Decimal, to: CurrencyCode },

    /// An address handed to the mailer is malformed.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

impl ServiceError {
    /// Shorthand for [`ServiceError::Unavailable`].
    #[must_use]
    pub fn unavailable(service: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            service,
            reason: reason.into(),
        }
    }
}

/// Why an order could not be submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The payment gateway declined the charge.
    #[error("payment_error")]
    Payment,

    /// The payment gateway could not be reached.
    #[error("payment gateway error: {0}")]
    Service(#[from] ServiceError),
}

/// Why a sign-up was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignUpError {
    /// The mailer rejected the address.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The welcome email could not be sent.
    #[error("failed to send welcome email: {0}")]
    Delivery(#[from] ServiceError),
}
