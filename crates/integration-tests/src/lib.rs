//! Integration tests for shopkit.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopkit-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Call sites wired to `mockall` collaborators
//! - `local_services` - Call sites wired to the configured local collaborators
//! - `helpers` - Cross-module properties of the pure helpers

use std::sync::Arc;

use shopkit_checkout::services::{
    MockAnalytics, MockClock, MockExchangeRates, MockMailer, MockPaymentGateway,
    MockSecurityCodes, MockShippingQuotes,
};
use shopkit_checkout::{BusinessHours, CheckoutConfig, Services};

/// Configuration with every optional variable left at its default.
///
/// # Panics
///
/// Panics if the built-in defaults fail to load.
#[must_use]
pub fn default_config() -> CheckoutConfig {
    CheckoutConfig::from_source(&|key: &str| {
        (key == "SHOPKIT_MAIL_FROM").then(|| "shop@example.com".to_string())
    })
    .expect("default config loads")
}

/// Collaborator mocks, configured by each test before being frozen into
/// [`Services`].
#[derive(Default)]
pub struct MockServices {
    pub rates: MockExchangeRates,
    pub shipping: MockShippingQuotes,
    pub analytics: MockAnalytics,
    pub payments: MockPaymentGateway,
    pub mailer: MockMailer,
    pub codes: MockSecurityCodes,
    pub clock: MockClock,
}

impl MockServices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze the expectations into a [`Services`] bundle.
    #[must_use]
    pub fn build(self, hours: BusinessHours) -> Services {
        Services {
            rates: Arc::new(self.rates),
            shipping: Arc::new(self.shipping),
            analytics: Arc::new(self.analytics),
            payments: Arc::new(self.payments),
            mailer: Arc::new(self.mailer),
            codes: Arc::new(self.codes),
            clock: Arc::new(self.clock),
            hours,
        }
    }
}
