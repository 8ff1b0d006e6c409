//! Payment card details.
//!
//! Card data is only ever handed to a payment gateway; the number and
//! security code are wrapped in [`SecretString`] so they never reach logs.

use secrecy::{ExposeSecret, SecretString};

/// A credit card presented at checkout.
///
/// Implements `Debug` manually to redact the card number and CVC.
#[derive(Clone)]
pub struct CreditCard {
    /// Name printed on the card.
    pub holder: String,
    /// Primary account number.
    pub number: SecretString,
    /// Expiry in `MM/YY` form.
    pub expiry: String,
    /// Card verification code.
    pub cvc: SecretString,
}

impl CreditCard {
    /// Create a card from its printed fields.
    #[must_use]
    pub fn new(
        holder: impl Into<String>,
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            holder: holder.into(),
            number: SecretString::from(number.into()),
            expiry: expiry.into(),
            cvc: SecretString::from(cvc.into()),
        }
    }

    /// Last four digits of the card number, for receipts and logs.
    #[must_use]
    pub fn last4(&self) -> String {
        let digits: Vec<char> = self
            .number
            .expose_secret()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let start = digits.len().saturating_sub(4);
        digits.get(start..).unwrap_or_default().iter().collect()
    }
}

impl std::fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let masked = format!("**** {}", self.last4());
        f.debug_struct("CreditCard")
            .field("holder", &self.holder)
            .field("number", &masked)
            .field("expiry", &self.expiry)
            .field("cvc", &"[REDACTED]")
            .finish()
    }
}
