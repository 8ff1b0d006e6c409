//! Orders and shipping quotes exchanged with external collaborators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type-safe order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random order ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// An order awaiting payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Amount to charge, in the store's base currency.
    pub total_amount: Decimal,
}

impl Order {
    /// Create an order with a freshly generated ID.
    #[must_use]
    pub fn new(total_amount: Decimal) -> Self {
        Self {
            id: OrderId::generate(),
            total_amount,
        }
    }
}

/// A shipping quote for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// Shipping cost in the store's base currency.
    pub cost: Decimal,
    /// Estimated delivery time in days.
    pub estimated_days: u32,
}
