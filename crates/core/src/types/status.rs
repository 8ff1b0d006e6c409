//! Payment outcome reported by a payment gateway.

use serde::{Deserialize, Serialize};

/// Outcome of a charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// The charge went through.
    Success,
    /// The charge was declined.
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("invalid payment status: {s}")),
        }
    }
}

/// Result record returned by a payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub status: PaymentStatus,
}

impl PaymentResult {
    /// A successful charge.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            status: PaymentStatus::Success,
        }
    }

    /// A declined charge.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            status: PaymentStatus::Failed,
        }
    }
}
