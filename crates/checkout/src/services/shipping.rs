//! Flat-rate shipping quotes.

use async_trait::async_trait;
use shopkit_core::ShippingQuote;

use super::ShippingQuotes;
use crate::config::ShippingConfig;
use crate::error::ServiceError;

/// Quotes the same cost and delivery time for every supported destination.
#[derive(Debug, Clone)]
pub struct FlatRateShipping {
    config: ShippingConfig,
}

impl FlatRateShipping {
    #[must_use]
    pub const fn new(config: ShippingConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ShippingQuotes for FlatRateShipping {
    async fn quote(&self, destination: &str) -> Result<Option<ShippingQuote>, ServiceError> {
        let destination = destination.trim().to_ascii_uppercase();
        if !self.config.destinations.contains(&destination) {
            tracing::warn!(destination = %destination, "No shipping to destination");
            return Ok(None);
        }

        Ok(Some(ShippingQuote {
            cost: self.config.cost,
            estimated_days: self.config.estimated_days,
        }))
    }
}
