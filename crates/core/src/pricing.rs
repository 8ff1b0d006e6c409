//! Coupons and discount calculation.
//!
//! Two fixed tables live here: the promotional [`Coupon`]s advertised to
//! customers, and the [`DiscountCode`]s the checkout understands when
//! computing a discounted price.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Coupon;

/// Errors from price calculations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    /// The price is zero or negative.
    #[error("Invalid price")]
    InvalidPrice,
}

/// A discount code accepted at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountCode {
    /// 10% off.
    Save10,
    /// 20% off.
    Save20,
}

impl DiscountCode {
    /// Look up a code. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SAVE10" => Some(Self::Save10),
            "SAVE20" => Some(Self::Save20),
            _ => None,
        }
    }

    /// Fraction of the price this code removes.
    #[must_use]
    pub fn rate(self) -> Decimal {
        match self {
            Self::Save10 => Decimal::new(1, 1),
            Self::Save20 => Decimal::new(2, 1),
        }
    }
}

/// Promotional coupons currently on offer.
#[must_use]
pub fn get_coupons() -> Vec<Coupon> {
    vec![
        Coupon::new("SAVE20NOW", Decimal::new(2, 1)),
        Coupon::new("DISCOUNT50OFF", Decimal::new(5, 1)),
    ]
}

/// Price after applying `discount_code`.
///
/// Unknown codes apply no discount and return `price` unchanged.
///
/// # Errors
///
/// Returns [`PricingError::InvalidPrice`] if `price` is not positive.
pub fn calculate_discount(price: Decimal, discount_code: &str) -> Result<Decimal, PricingError> {
    if price <= Decimal::ZERO {
        return Err(PricingError::InvalidPrice);
    }

    let rate = DiscountCode::from_code(discount_code).map_or(Decimal::ZERO, DiscountCode::rate);
    Ok(price - price * rate)
}

/// Store-wide seasonal discount rate for `date`: 20% on Christmas Day,
/// nothing otherwise.
#[must_use]
pub fn seasonal_discount(date: NaiveDate) -> Decimal {
    if date.month() == 12 && date.day() == 25 {
        Decimal::new(2, 1)
    } else {
        Decimal::ZERO
    }
}
