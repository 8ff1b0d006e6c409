//! Shopkit Checkout - call sites that reach external collaborators.
//!
//! Every wrapper in [`wrappers`] delegates to a collaborator trait from
//! [`services`] and reshapes its answer. Collaborators are trait objects so
//! tests can swap in `mockall` mocks (enable the `mocks` feature to use them
//! from another crate).
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Error types surfaced by the wrappers
//! - [`services`] - Collaborator traits and their local implementations
//! - [`state`] - Bundle of configured collaborators
//! - [`wrappers`] - The async call sites

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod wrappers;

pub use config::{BusinessHours, CheckoutConfig, ConfigError};
pub use error::{OrderError, ServiceError, SignUpError};
pub use state::Services;
