//! Subcommand implementations.
//!
//! Every command returns the text to print on stdout; errors bubble up to
//! `main`, which logs them and exits non-zero.
//!
//! - `helpers` - Pure helpers from `shopkit-core`
//! - `checkout` - Async call sites from `shopkit-checkout`

pub mod checkout;
pub mod helpers;
