//! Sandbox payment gateway.

use async_trait::async_trait;
use rust_decimal::Decimal;
use shopkit_core::{CreditCard, PaymentResult};

use super::PaymentGateway;
use crate::error::ServiceError;

/// Card ending that the sandbox always declines.
pub const DECLINED_CARD_LAST4: &str = "0002";

/// A gateway that approves every charge except for cards ending in
/// [`DECLINED_CARD_LAST4`]. Non-positive amounts are refused outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct SandboxGateway;

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn charge(
        &self,
        card: &CreditCard,
        amount: Decimal,
    ) -> Result<PaymentResult, ServiceError> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::unavailable(
                "payments",
                format!("refusing to charge non-positive amount {amount}"),
            ));
        }

        let last4 = card.last4();
        let result = if last4 == DECLINED_CARD_LAST4 {
            PaymentResult::failed()
        } else {
            PaymentResult::success()
        };

        tracing::info!(
            card = %last4,
            amount = %amount,
            status = %result.status,
            "Sandbox charge processed"
        );
        Ok(result)
    }
}
