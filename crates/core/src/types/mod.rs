//! Core types for shopkit.
//!
//! This module provides type-safe wrappers for the records passed between
//! the pure helpers and the external collaborators.

pub mod card;
pub mod coupon;
pub mod email;
pub mod order;
pub mod price;
pub mod status;

pub use card::CreditCard;
pub use coupon::Coupon;
pub use email::{Email, EmailError};
pub use order::{Order, OrderId, ShippingQuote};
pub use price::{CurrencyCode, CurrencyCodeError, Price};
pub use status::{PaymentResult, PaymentStatus};
