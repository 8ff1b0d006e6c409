//! One-time login codes.

use rand::Rng;

use super::SecurityCodes;

/// Generates random 6-digit numeric codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodes;

impl SecurityCodes for RandomCodes {
    fn generate_code(&self) -> String {
        let code: u32 = rand::rng().random_range(100_000..1_000_000);
        code.to_string()
    }
}
