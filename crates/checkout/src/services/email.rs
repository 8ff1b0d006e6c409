//! Email delivery that writes messages to the log.

use async_trait::async_trait;
use shopkit_core::Email;

use super::Mailer;
use crate::error::ServiceError;

/// Validates recipients with [`Email::parse`] and logs each message instead
/// of handing it to an SMTP relay.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: Email,
}

impl LogMailer {
    #[must_use]
    pub const fn new(from: Email) -> Self {
        Self { from }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    fn is_valid_email(&self, address: &str) -> bool {
        Email::parse(address).is_ok()
    }

    async fn send_email(&self, to: &Email, body: &str) -> Result<(), ServiceError> {
        tracing::info!(
            from = %self.from,
            to = %to,
            body_len = body.len(),
            "Email sent successfully"
        );
        Ok(())
    }
}
