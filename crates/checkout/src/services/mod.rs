//! External collaborators used by the checkout call sites.
//!
//! Each trait names one outside dependency. The concrete types in the
//! submodules are local, deterministic stand-ins driven by
//! [`CheckoutConfig`](crate::config::CheckoutConfig); production deployments
//! can plug in network clients behind the same traits.
//!
//! With `cfg(test)` or the `mocks` feature, every trait also gets a
//! `mockall` double (`MockExchangeRates`, `MockMailer`, ...).
//!
//! # Services
//!
//! - [`currency`] - USD-relative exchange rates
//! - [`shipping`] - Flat-rate shipping quotes
//! - [`analytics`] - Page-view tracking
//! - [`payments`] - Sandbox payment gateway
//! - [`email`] - Email validation and delivery
//! - [`security`] - One-time login codes
//! - [`clock`] - Wall-clock time

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use shopkit_core::{CreditCard, CurrencyCode, Email, PaymentResult, ShippingQuote};

use crate::error::ServiceError;

pub mod analytics;
pub mod clock;
pub mod currency;
pub mod email;
pub mod payments;
pub mod security;
pub mod shipping;

pub use analytics::TracingAnalytics;
pub use clock::SystemClock;
pub use currency::FixedRates;
pub use email::LogMailer;
pub use payments::SandboxGateway;
pub use security::RandomCodes;
pub use shipping::FlatRateShipping;

/// Exchange-rate lookup by currency pair.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ExchangeRates: Send + Sync {
    /// How many units of `to` one unit of `from` buys.
    async fn exchange_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Decimal, ServiceError>;
}

/// Shipping-quote lookup by destination.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ShippingQuotes: Send + Sync {
    /// Quote for `destination`, or `None` if we do not ship there.
    async fn quote(&self, destination: &str) -> Result<Option<ShippingQuote>, ServiceError>;
}

/// Page-view tracking.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait Analytics: Send + Sync {
    async fn track_page_view(&self, path: &str) -> Result<(), ServiceError>;
}

/// Card payments.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` to `card`.
    ///
    /// A declined card is a successful call with
    /// [`PaymentStatus::Failed`](shopkit_core::PaymentStatus::Failed); `Err`
    /// means the gateway itself failed.
    async fn charge(
        &self,
        card: &CreditCard,
        amount: Decimal,
    ) -> Result<PaymentResult, ServiceError>;
}

/// Email validation and delivery.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Whether `address` is acceptable as a recipient.
    fn is_valid_email(&self, address: &str) -> bool;

    /// Send a plain-text message.
    async fn send_email(&self, to: &Email, body: &str) -> Result<(), ServiceError>;
}

/// One-time security code generation.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait SecurityCodes: Send + Sync {
    fn generate_code(&self) -> String;
}

/// Wall-clock time source.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}
