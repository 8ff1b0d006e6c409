//! Promotional coupon type.

use rust_decimal::Decimal;
use serde::Serialize;

/// A promotional coupon: a code paired with the fraction of the price it
/// takes off.
///
/// Coupons are statically defined; `discount` lies in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coupon {
    /// Code the customer enters at checkout.
    pub code: &'static str,
    /// Fraction of the price removed (`0.2` is 20% off).
    pub discount: Decimal,
}

impl Coupon {
    /// Create a coupon.
    #[must_use]
    pub const fn new(code: &'static str, discount: Decimal) -> Self {
        Self { code, discount }
    }

    /// Discount expressed as a whole-number percentage.
    #[must_use]
    pub fn percent_off(&self) -> Decimal {
        (self.discount * Decimal::ONE_HUNDRED).normalize()
    }
}
