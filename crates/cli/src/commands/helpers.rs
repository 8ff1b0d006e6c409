//! Commands backed by the pure `shopkit-core` helpers.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use shopkit_core::{
    InputErrors, PricingError, Product, ProductError, Stack, StackError, ValidationError,
};
use thiserror::Error;

/// Errors specific to helper commands.
#[derive(Debug, Error)]
pub enum HelperError {
    /// `factorial` received a negative number or overflowed.
    #[error("factorial of {0} is undefined or too large")]
    Factorial(i32),
}

pub fn max(a: f64, b: f64) -> String {
    shopkit_core::max(a, b).to_string()
}

pub fn fizz_buzz(n: i64) -> String {
    shopkit_core::fizz_buzz(n)
}

pub fn average(numbers: &[f64]) -> String {
    shopkit_core::calculate_average(numbers).to_string()
}

pub fn factorial(n: i32) -> Result<String, HelperError> {
    shopkit_core::factorial(n)
        .map(|v| v.to_string())
        .ok_or(HelperError::Factorial(n))
}

pub fn coupons() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&shopkit_core::get_coupons())
}

pub fn discount(price: Decimal, code: &str) -> Result<String, PricingError> {
    shopkit_core::calculate_discount(price, code).map(|p| p.normalize().to_string())
}

/// Seasonal rate for `date`, or for today's local date.
pub fn seasonal(date: Option<NaiveDate>) -> String {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    shopkit_core::seasonal_discount(date).to_string()
}

pub fn username(username: &str) -> String {
    shopkit_core::is_valid_username(username).to_string()
}

pub fn validate_input(username: &str, age: u32) -> Result<String, InputErrors> {
    shopkit_core::validate_user_input(username, age)?;
    Ok("Validation successful".to_string())
}

pub fn price_range(price: Decimal, min: Decimal, max: Decimal) -> String {
    shopkit_core::is_price_in_range(price, min, max).to_string()
}

pub fn can_drive(age: u32, country: &str) -> Result<String, ValidationError> {
    shopkit_core::can_drive(age, country).map(|ok| ok.to_string())
}

pub fn password(password: &str) -> String {
    shopkit_core::is_strong_password(password).to_string()
}

pub fn publish(name: String, price: Decimal) -> Result<String, ProductError> {
    let receipt = shopkit_core::publish_product(&Product { name, price })?;
    Ok(receipt.message.to_string())
}

/// Push every value, then pop them all, one per line.
pub fn stack(values: Vec<String>) -> Result<String, StackError> {
    let mut stack = Stack::new();
    for value in values {
        stack.push(value);
    }
    tracing::debug!(size = stack.size(), "Filled stack");

    let mut popped = Vec::with_capacity(stack.size());
    while !stack.is_empty() {
        popped.push(stack.pop()?);
    }
    Ok(popped.join("\n"))
}
