//! Configured collaborators shared by the call sites.

use std::sync::Arc;

use crate::config::{BusinessHours, CheckoutConfig};
use crate::services::{
    Analytics, Clock, ExchangeRates, FixedRates, FlatRateShipping, LogMailer, Mailer,
    PaymentGateway, RandomCodes, SandboxGateway, SecurityCodes, ShippingQuotes, SystemClock,
    TracingAnalytics,
};

/// Every collaborator the checkout needs, behind trait objects.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct Services {
    pub rates: Arc<dyn ExchangeRates>,
    pub shipping: Arc<dyn ShippingQuotes>,
    pub analytics: Arc<dyn Analytics>,
    pub payments: Arc<dyn PaymentGateway>,
    pub mailer: Arc<dyn Mailer>,
    pub codes: Arc<dyn SecurityCodes>,
    pub clock: Arc<dyn Clock>,
    pub hours: BusinessHours,
}

impl Services {
    /// Build the local collaborators from configuration.
    #[must_use]
    pub fn from_config(config: &CheckoutConfig) -> Self {
        tracing::debug!(
            currencies = config.exchange_rates.len(),
            destinations = config.shipping.destinations.len(),
            "Building checkout services"
        );

        Self {
            rates: Arc::new(FixedRates::new(config.exchange_rates.clone())),
            shipping: Arc::new(FlatRateShipping::new(config.shipping.clone())),
            analytics: Arc::new(TracingAnalytics),
            payments: Arc::new(SandboxGateway),
            mailer: Arc::new(LogMailer::new(config.mail_from.clone())),
            codes: Arc::new(RandomCodes),
            clock: Arc::new(SystemClock),
            hours: config.hours,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("hours", &self.hours)
            .finish_non_exhaustive()
    }
}
