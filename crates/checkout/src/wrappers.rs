//! Checkout call sites.
//!
//! Each function delegates to a collaborator and reshapes its answer into
//! something the storefront can show. There are no retries or timeouts;
//! collaborator failures propagate as `Err`.

use chrono::Timelike;
use rust_decimal::Decimal;
use shopkit_core::{CreditCard, CurrencyCode, Email, Order, PaymentStatus, Price};

use crate::config::BusinessHours;
use crate::error::{OrderError, ServiceError, SignUpError};
use crate::services::{
    Analytics, Clock, ExchangeRates, Mailer, PaymentGateway, SecurityCodes, ShippingQuotes,
};

/// Currency every catalog price is stored in.
pub const BASE_CURRENCY: CurrencyCode = CurrencyCode::USD;

/// Body of the welcome email sent on sign-up.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

/// Path recorded when the home page renders.
pub const HOME_PATH: &str = "/home";

/// Convert a base-currency `price` into `currency`.
///
/// # Errors
///
/// Returns the rate lookup's [`ServiceError`], or
/// [`ServiceError::Overflow`] if the converted amount is out of range.
pub async fn get_price_in_currency(
    rates: &dyn ExchangeRates,
    price: Decimal,
    currency: CurrencyCode,
) -> Result<Price, ServiceError> {
    let rate = rates.exchange_rate(BASE_CURRENCY, currency).await?;
    let converted = Price::new(price, BASE_CURRENCY)
        .convert(rate, currency)
        .ok_or(ServiceError::Overflow {
            amount: price,
            to: currency,
        })?;
    tracing::debug!(%price, %currency, %rate, converted = %converted, "Converted price");
    Ok(converted)
}

/// Human-readable shipping line for `destination`.
///
/// Returns `"Shipping Unavailable"` when no quote exists.
///
/// # Errors
///
/// Returns the quote lookup's [`ServiceError`].
pub async fn get_shipping_info(
    shipping: &dyn ShippingQuotes,
    destination: &str,
) -> Result<String, ServiceError> {
    let Some(quote) = shipping.quote(destination).await? else {
        return Ok("Shipping Unavailable".to_string());
    };

    Ok(format!(
        "Shipping Cost: ${} ({} Days)",
        quote.cost, quote.estimated_days
    ))
}

/// Render the home page, recording a page view.
///
/// # Errors
///
/// Returns the tracker's [`ServiceError`].
pub async fn render_page(analytics: &dyn Analytics) -> Result<String, ServiceError> {
    analytics.track_page_view(HOME_PATH).await?;
    Ok("<div>content</div>".to_string())
}

/// Charge `card` for `order`.
///
/// # Errors
///
/// Returns [`OrderError::Payment`] if the charge is declined, or
/// [`OrderError::Service`] if the gateway fails.
pub async fn submit_order(
    payments: &dyn PaymentGateway,
    order: &Order,
    card: &CreditCard,
) -> Result<(), OrderError> {
    let result = payments.charge(card, order.total_amount).await?;

    match result.status {
        PaymentStatus::Success => {
            tracing::debug!(order_id = %order.id, "Order paid");
            Ok(())
        }
        PaymentStatus::Failed => {
            tracing::debug!(order_id = %order.id, "Order payment declined");
            Err(OrderError::Payment)
        }
    }
}

/// Register `address` and send a welcome email.
///
/// # Errors
///
/// Returns [`SignUpError::InvalidEmail`] when the address is rejected, or
/// [`SignUpError::Delivery`] when the welcome email cannot be sent.
pub async fn sign_up(mailer: &dyn Mailer, address: &str) -> Result<Email, SignUpError> {
    if !mailer.is_valid_email(address) {
        return Err(SignUpError::InvalidEmail(address.to_string()));
    }
    let email =
        Email::parse(address).map_err(|_| SignUpError::InvalidEmail(address.to_string()))?;

    mailer.send_email(&email, WELCOME_MESSAGE).await?;
    Ok(email)
}

/// Email a fresh one-time login code to `email`.
///
/// # Errors
///
/// Returns the mailer's [`ServiceError`].
pub async fn login(
    codes: &dyn SecurityCodes,
    mailer: &dyn Mailer,
    email: &Email,
) -> Result<(), ServiceError> {
    let code = codes.generate_code();
    mailer.send_email(email, &code).await
}

/// Whether the store is currently within its opening hours.
#[must_use]
pub fn is_online(clock: &dyn Clock, hours: BusinessHours) -> bool {
    hours.contains(clock.now().hour())
}
