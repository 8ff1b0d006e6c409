//! Checkout call sites driven through a [`Services`] bundle of mocks.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use mockall::predicate::eq;
use rust_decimal::Decimal;
use shopkit_checkout::{BusinessHours, OrderError, ServiceError, SignUpError, wrappers};
use shopkit_core::{CreditCard, CurrencyCode, Email, Order, PaymentResult, ShippingQuote};
use shopkit_integration_tests::MockServices;

fn card() -> CreditCard {
    CreditCard::new("Grace Hopper", "5555 5555 5555 4444", "01/31", "321")
}

#[tokio::test]
async fn test_checkout_happy_path() {
    let mut mocks = MockServices::new();
    mocks
        .analytics
        .expect_track_page_view()
        .with(eq("/home"))
        .times(1)
        .returning(|_| Ok(()));
    mocks
        .rates
        .expect_exchange_rate()
        .with(eq(CurrencyCode::USD), eq(CurrencyCode::GBP))
        .times(1)
        .returning(|_, _| Ok(Decimal::new(8, 1)));
    mocks
        .shipping
        .expect_quote()
        .with(eq("UK"))
        .times(1)
        .returning(|_| {
            Ok(Some(ShippingQuote {
                cost: Decimal::new(450, 2),
                estimated_days: 3,
            }))
        });
    mocks
        .payments
        .expect_charge()
        .withf(|card, amount| card.last4() == "4444" && *amount == Decimal::from(25))
        .times(1)
        .returning(|_, _| Ok(PaymentResult::success()));
    let services = mocks.build(BusinessHours::default());

    let page = wrappers::render_page(&*services.analytics).await.unwrap();
    assert_eq!(page, "<div>content</div>");

    let price = wrappers::get_price_in_currency(
        &*services.rates,
        Decimal::from(25),
        CurrencyCode::GBP,
    )
    .await
    .unwrap();
    assert_eq!(price.to_string(), "£20.00");

    let shipping = wrappers::get_shipping_info(&*services.shipping, "UK")
        .await
        .unwrap();
    assert_eq!(shipping, "Shipping Cost: $4.50 (3 Days)");

    let order = Order::new(Decimal::from(25));
    wrappers::submit_order(&*services.payments, &order, &card())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_declined_payment_reports_payment_error() {
    let mut mocks = MockServices::new();
    mocks
        .payments
        .expect_charge()
        .returning(|_, _| Ok(PaymentResult::failed()));
    let services = mocks.build(BusinessHours::default());

    let order = Order::new(Decimal::from(99));
    let err = wrappers::submit_order(&*services.payments, &order, &card())
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::Payment);
}

#[tokio::test]
async fn test_sign_up_then_login() {
    let mut mocks = MockServices::new();
    mocks.mailer.expect_is_valid_email().returning(|_| true);
    mocks
        .mailer
        .expect_send_email()
        .withf(|to, body| to.as_str() == "grace@navy.mil" && body == "Welcome aboard!")
        .times(1)
        .returning(|_, _| Ok(()));
    mocks
        .mailer
        .expect_send_email()
        .withf(|to, body| to.as_str() == "grace@navy.mil" && body == "654321")
        .times(1)
        .returning(|_, _| Ok(()));
    mocks
        .codes
        .expect_generate_code()
        .times(1)
        .returning(|| "654321".to_string());
    let services = mocks.build(BusinessHours::default());

    let email = wrappers::sign_up(&*services.mailer, "grace@navy.mil")
        .await
        .unwrap();
    wrappers::login(&*services.codes, &*services.mailer, &email)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sign_up_surfaces_delivery_failure() {
    let mut mocks = MockServices::new();
    mocks.mailer.expect_is_valid_email().returning(|_| true);
    mocks
        .mailer
        .expect_send_email()
        .returning(|_, _| Err(ServiceError::unavailable("email", "relay down")));
    let services = mocks.build(BusinessHours::default());

    let err = wrappers::sign_up(&*services.mailer, "grace@navy.mil")
        .await
        .unwrap_err();
    assert!(matches!(err, SignUpError::Delivery(ServiceError::Unavailable { .. })));
}

#[tokio::test]
async fn test_login_propagates_mailer_error() {
    let mut mocks = MockServices::new();
    mocks
        .codes
        .expect_generate_code()
        .returning(|| "000001".to_string());
    mocks
        .mailer
        .expect_send_email()
        .returning(|_, _| Err(ServiceError::unavailable("email", "quota exceeded")));
    let services = mocks.build(BusinessHours::default());

    let email = Email::parse("grace@navy.mil").unwrap();
    let err = wrappers::login(&*services.codes, &*services.mailer, &email)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "email unavailable: quota exceeded");
}

#[test]
fn test_is_online_uses_configured_hours() {
    let late_night = NaiveDate::from_ymd_opt(2026, 6, 1)
        .unwrap()
        .and_hms_opt(22, 15, 0)
        .unwrap();
    let mut mocks = MockServices::new();
    mocks.clock.expect_now().return_const(late_night);
    let services = mocks.build(BusinessHours::new(18, 24).unwrap());

    assert!(wrappers::is_online(&*services.clock, services.hours));
}
