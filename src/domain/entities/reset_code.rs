//! Password reset code issued by the forgot-password flow.

use chrono::{DateTime, Utc};

/// Input data for storing a freshly issued reset code.
///
/// Only the HMAC of the 6-digit code is persisted; the plaintext code exists
/// solely in the email sent to the user.
#[derive(Debug, Clone)]
pub struct NewResetCode {
    pub email: String,
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
}
