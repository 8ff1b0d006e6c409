//! Checkout configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPKIT_MAIL_FROM` - Sender address for outgoing email
//!
//! ## Optional
//! - `SHOPKIT_EXCHANGE_RATES` - USD-relative rates, e.g. `EUR=0.92,GBP=0.79`
//!   (default: built-in table)
//! - `SHOPKIT_SHIPPING_DESTINATIONS` - Comma-separated destinations we ship to
//!   (default: `US,CA,UK`)
//! - `SHOPKIT_SHIPPING_COST` - Flat shipping cost in USD (default: 10)
//! - `SHOPKIT_SHIPPING_DAYS` - Estimated delivery days (default: 2)
//! - `SHOPKIT_OPEN_HOUR` - Hour the store opens, 0-23 (default: 8)
//! - `SHOPKIT_CLOSE_HOUR` - Hour the store closes, 1-24 (default: 20)

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use shopkit_core::{CurrencyCode, Email};
use thiserror::Error;

/// Built-in USD-relative exchange rates.
const DEFAULT_EXCHANGE_RATES: &str = "EUR=0.92,GBP=0.79,CAD=1.36,AUD=1.52";
const DEFAULT_SHIPPING_DESTINATIONS: &str = "US,CA,UK";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Checkout configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Rates from USD into each supported currency
    pub exchange_rates: HashMap<CurrencyCode, Decimal>,
    /// Flat-rate shipping table
    pub shipping: ShippingConfig,
    /// Hours during which the store is online
    pub hours: BusinessHours,
    /// Sender address for outgoing email
    pub mail_from: Email,
}

/// Flat-rate shipping configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingConfig {
    /// Upper-cased destination codes we ship to
    pub destinations: Vec<String>,
    /// Cost per shipment in USD
    pub cost: Decimal,
    /// Estimated delivery time in days
    pub estimated_days: u32,
}

/// Opening hours as a half-open `[open, close)` range of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    open: u32,
    close: u32,
}

impl BusinessHours {
    /// Create opening hours.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` unless `open < close <= 24`.
    pub fn new(open: u32, close: u32) -> Result<Self, ConfigError> {
        if open >= close || close > 24 {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPKIT_OPEN_HOUR/SHOPKIT_CLOSE_HOUR".to_string(),
                format!("opening hours {open}-{close} must satisfy open < close <= 24"),
            ));
        }
        Ok(Self { open, close })
    }

    /// Whether `hour` falls inside the opening hours.
    #[must_use]
    pub const fn contains(&self, hour: u32) -> bool {
        hour >= self.open && hour < self.close
    }

    #[must_use]
    pub const fn open(&self) -> u32 {
        self.open
    }

    #[must_use]
    pub const fn close(&self) -> u32 {
        self.close
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self { open: 8, close: 20 }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(&|key: &str| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_source(source: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mail_from = get_required(source, "SHOPKIT_MAIL_FROM")?;
        let mail_from = Email::parse(&mail_from).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPKIT_MAIL_FROM".to_string(), e.to_string())
        })?;

        let exchange_rates = parse_exchange_rates(&get_or_default(
            source,
            "SHOPKIT_EXCHANGE_RATES",
            DEFAULT_EXCHANGE_RATES,
        ))
        .map_err(|e| ConfigError::InvalidEnvVar("SHOPKIT_EXCHANGE_RATES".to_string(), e))?;

        let shipping = ShippingConfig {
            destinations: parse_list(&get_or_default(
                source,
                "SHOPKIT_SHIPPING_DESTINATIONS",
                DEFAULT_SHIPPING_DESTINATIONS,
            )),
            cost: parse_var(source, "SHOPKIT_SHIPPING_COST", "10")?,
            estimated_days: parse_var(source, "SHOPKIT_SHIPPING_DAYS", "2")?,
        };

        let hours = BusinessHours::new(
            parse_var(source, "SHOPKIT_OPEN_HOUR", "8")?,
            parse_var(source, "SHOPKIT_CLOSE_HOUR", "20")?,
        )?;

        Ok(Self {
            exchange_rates,
            shipping,
            hours,
            mail_from,
        })
    }
}

fn get_required(source: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    source(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

fn get_or_default(source: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    source(key).unwrap_or_else(|| default.to_string())
}

fn parse_var<T>(
    source: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_or_default(source, key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse `CODE=rate` pairs separated by commas.
fn parse_exchange_rates(raw: &str) -> Result<HashMap<CurrencyCode, Decimal>, String> {
    let mut rates = HashMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (code, rate) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected CODE=rate, got {pair:?}"))?;
        let code: CurrencyCode = code.parse().map_err(|e| format!("{e}"))?;
        let rate: Decimal = rate
            .trim()
            .parse()
            .map_err(|e| format!("rate for {code}: {e}"))?;
        if rate <= Decimal::ZERO {
            return Err(format!("rate for {code} must be positive"));
        }
        rates.insert(code, rate);
    }
    Ok(rates)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}
