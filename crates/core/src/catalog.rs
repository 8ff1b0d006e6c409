//! Product publishing checks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a product cannot be published.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProductError {
    #[error("Name is missing")]
    InvalidName,
    #[error("Price is missing")]
    InvalidPrice,
}

impl ProductError {
    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidPrice => "invalid_price",
        }
    }
}

/// A product draft submitted for publishing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Decimal,
}

/// Confirmation returned once a product passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReceipt {
    pub message: &'static str,
}

/// Validate a product for publishing.
///
/// # Errors
///
/// Returns [`ProductError::InvalidName`] for a blank name, then
/// [`ProductError::InvalidPrice`] for a non-positive price.
pub fn publish_product(product: &Product) -> Result<PublishReceipt, ProductError> {
    if product.name.trim().is_empty() {
        return Err(ProductError::InvalidName);
    }
    if product.price <= Decimal::ZERO {
        return Err(ProductError::InvalidPrice);
    }

    Ok(PublishReceipt {
        message: "Product was successfully published",
    })
}
