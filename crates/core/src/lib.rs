//! Shopkit Core - pure helpers shared by every shopkit component.
//!
//! This crate provides the building blocks used by:
//! - `checkout` - async call sites that talk to external collaborators
//! - `cli` - the `shopkit` command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no async,
//! no clocks. Anything that needs the outside world lives in `checkout`.
//!
//! # Modules
//!
//! - [`types`] - Newtypes for prices, emails, coupons, orders and payment cards
//! - [`math`] - Small numeric helpers (`max`, `fizz_buzz`, averages, factorials)
//! - [`pricing`] - Coupon table and discount calculation
//! - [`validation`] - Username, age, price-range and driving-age predicates
//! - [`catalog`] - Product publishing checks
//! - [`stack`] - A last-in-first-out container

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod math;
pub mod pricing;
pub mod stack;
pub mod types;
pub mod validation;

pub use catalog::{Product, ProductError, PublishReceipt, publish_product};
pub use math::{calculate_average, factorial, fizz_buzz, max};
pub use pricing::{DiscountCode, PricingError, calculate_discount, get_coupons, seasonal_discount};
pub use stack::{Stack, StackError};
pub use types::*;
pub use validation::{
    InputErrors, ValidationError, can_drive, is_price_in_range, is_strong_password,
    is_valid_username, validate_user_input,
};
