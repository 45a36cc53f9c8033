//! Repository trait for password reset codes.

use crate::domain::entities::NewResetCode;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for one-time password reset codes.
///
/// Codes are stored HMAC-hashed with an expiry and consumed exactly once.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgResetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResetRepository: Send + Sync {
    /// Stores a freshly issued reset code.
    async fn store(&self, code: NewResetCode) -> Result<(), AppError>;

    /// Consumes a live reset code matching `email` and `code_hash`.
    ///
    /// Returns `Ok(true)` and marks the code consumed if an unexpired,
    /// unconsumed match exists; `Ok(false)` otherwise.
    async fn consume(&self, email: &str, code_hash: &str) -> Result<bool, AppError>;
}
