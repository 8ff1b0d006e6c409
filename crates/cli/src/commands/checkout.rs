//! Commands backed by the `shopkit-checkout` call sites.
//!
//! # Environment Variables
//!
//! See `shopkit_checkout::config` - at minimum `SHOPKIT_MAIL_FROM` must be
//! set before any of these commands run.

use rust_decimal::Decimal;
use shopkit_checkout::{
    CheckoutConfig, ConfigError, OrderError, ServiceError, Services, SignUpError, wrappers,
};
use shopkit_core::{CreditCard, CurrencyCode, Email, EmailError, Order};

/// Load configuration and build the local collaborators.
pub fn services() -> Result<Services, ConfigError> {
    let config = CheckoutConfig::from_env()?;
    Ok(Services::from_config(&config))
}

pub async fn convert(
    services: &Services,
    price: Decimal,
    currency: CurrencyCode,
) -> Result<String, ServiceError> {
    let converted = wrappers::get_price_in_currency(&*services.rates, price, currency).await?;
    Ok(converted.to_string())
}

pub async fn shipping(services: &Services, destination: &str) -> Result<String, ServiceError> {
    wrappers::get_shipping_info(&*services.shipping, destination).await
}

pub async fn render(services: &Services) -> Result<String, ServiceError> {
    wrappers::render_page(&*services.analytics).await
}

pub async fn order(
    services: &Services,
    amount: Decimal,
    card: &CreditCard,
) -> Result<String, OrderError> {
    let order = Order::new(amount);
    wrappers::submit_order(&*services.payments, &order, card).await?;
    Ok(format!("Order {} paid with card ending {}", order.id, card.last4()))
}

pub async fn signup(services: &Services, address: &str) -> Result<String, SignUpError> {
    let email = wrappers::sign_up(&*services.mailer, address).await?;
    Ok(format!("Welcome email sent to {email}"))
}

/// Errors from the `login` command.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub async fn login(services: &Services, address: &str) -> Result<String, LoginError> {
    let email = Email::parse(address)?;
    wrappers::login(&*services.codes, &*services.mailer, &email).await?;
    Ok(format!("Login code sent to {email}"))
}

pub fn online(services: &Services) -> String {
    let hours = services.hours;
    if wrappers::is_online(&*services.clock, hours) {
        format!("Online (open {:02}:00-{:02}:00)", hours.open(), hours.close())
    } else {
        format!("Offline (open {:02}:00-{:02}:00)", hours.open(), hours.close())
    }
}
