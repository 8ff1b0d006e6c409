//! Exchange rates from a fixed USD-relative table.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use shopkit_core::CurrencyCode;

use super::ExchangeRates;
use crate::error::ServiceError;

/// Exchange rates backed by a static table of USD-relative rates.
///
/// Cross rates (neither side USD) are derived through USD.
#[derive(Debug, Clone)]
pub struct FixedRates {
    usd_rates: HashMap<CurrencyCode, Decimal>,
}

impl FixedRates {
    /// Create from a table of `USD -> currency` rates. USD itself is always 1.
    ///
    /// A zero rate makes every pair that divides by it report
    /// [`ServiceError::MissingRate`].
    #[must_use]
    pub fn new(mut usd_rates: HashMap<CurrencyCode, Decimal>) -> Self {
        usd_rates.insert(CurrencyCode::USD, Decimal::ONE);
        Self { usd_rates }
    }

    fn usd_rate(&self, code: CurrencyCode) -> Option<Decimal> {
        self.usd_rates.get(&code).copied()
    }
}

#[async_trait]
impl ExchangeRates for FixedRates {
    async fn exchange_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Decimal, ServiceError> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        let missing = || ServiceError::MissingRate { from, to };
        let from_rate = self.usd_rate(from).ok_or_else(missing)?;
        let to_rate = self.usd_rate(to).ok_or_else(missing)?;

        let rate = to_rate.checked_div(from_rate).ok_or_else(missing)?.round_dp(6);
        tracing::debug!(%from, %to, %rate, "Resolved exchange rate");
        Ok(rate)
    }
}
