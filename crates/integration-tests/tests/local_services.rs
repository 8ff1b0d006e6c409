//! Checkout call sites wired to the configured local collaborators.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use shopkit_checkout::services::payments::DECLINED_CARD_LAST4;
use shopkit_checkout::{OrderError, ServiceError, Services, SignUpError, wrappers};
use shopkit_core::{CreditCard, CurrencyCode, Order};
use shopkit_integration_tests::default_config;

fn services() -> Services {
    Services::from_config(&default_config())
}

#[tokio::test]
async fn test_every_configured_currency_converts() {
    let services = services();
    for currency in CurrencyCode::ALL {
        let price =
            wrappers::get_price_in_currency(&*services.rates, Decimal::from(100), currency)
                .await
                .unwrap();
        assert_eq!(price.currency_code, currency);
        assert!(price.amount > Decimal::ZERO);
    }
}

#[tokio::test]
async fn test_usd_conversion_is_identity() {
    let services = services();
    let price = wrappers::get_price_in_currency(
        &*services.rates,
        Decimal::new(1999, 2),
        CurrencyCode::USD,
    )
    .await
    .unwrap();
    assert_eq!(price.to_string(), "$19.99");
}

#[tokio::test]
async fn test_shipping_defaults() {
    let services = services();
    assert_eq!(
        wrappers::get_shipping_info(&*services.shipping, "ca").await.unwrap(),
        "Shipping Cost: $10 (2 Days)"
    );
    assert_eq!(
        wrappers::get_shipping_info(&*services.shipping, "Atlantis").await.unwrap(),
        "Shipping Unavailable"
    );
}

#[tokio::test]
async fn test_sandbox_declines_test_card() {
    let services = services();
    let declined = CreditCard::new(
        "Test",
        format!("400000000000{DECLINED_CARD_LAST4}"),
        "01/31",
        "000",
    );
    let approved = CreditCard::new("Test", "4242424242424242", "01/31", "000");
    let order = Order::new(Decimal::from(10));

    assert_eq!(
        wrappers::submit_order(&*services.payments, &order, &declined).await,
        Err(OrderError::Payment)
    );
    assert_eq!(
        wrappers::submit_order(&*services.payments, &order, &approved).await,
        Ok(())
    );
}

#[tokio::test]
async fn test_sandbox_rejects_empty_order() {
    let services = services();
    let card = CreditCard::new("Test", "4242424242424242", "01/31", "000");
    let err = wrappers::submit_order(&*services.payments, &Order::new(Decimal::ZERO), &card)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Service(ServiceError::Unavailable { .. })));
}

#[tokio::test]
async fn test_local_mailer_rejects_malformed_address() {
    let services = services();
    assert_eq!(
        wrappers::sign_up(&*services.mailer, "a").await,
        Err(SignUpError::InvalidEmail("a".to_string()))
    );
    assert!(wrappers::sign_up(&*services.mailer, "ok@example.com").await.is_ok());
}

#[tokio::test]
async fn test_render_page_with_tracing_analytics() {
    let services = services();
    assert_eq!(
        wrappers::render_page(&*services.analytics).await.unwrap(),
        "<div>content</div>"
    );
}
