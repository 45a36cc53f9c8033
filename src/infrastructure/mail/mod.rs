//! Outbound mail abstraction.
//!
//! Actual SMTP delivery is an external collaborator; the service only needs a
//! "send message" capability, expressed as the [`Mailer`] trait. The default
//! [`LogMailer`] writes the message to the log, which is what local
//! development and tests use. A production deployment plugs in a real
//! transport behind the same trait.

use async_trait::async_trait;

use crate::error::AppError;

/// Capability to deliver a password reset code to an email address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends the reset code to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the underlying transport fails.
    async fn send_reset_code(&self, recipient: &str, code: &str) -> Result<(), AppError>;
}

/// Mailer that logs instead of sending.
///
/// The code itself is only written at DEBUG so production logs at INFO never
/// contain live reset codes.
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_reset_code(&self, recipient: &str, code: &str) -> Result<(), AppError> {
        tracing::info!("password reset code dispatched to {recipient}");
        tracing::debug!("reset code for {recipient}: {code}");
        Ok(())
    }
}
