//! Account registration, authentication, and credential management.

use chrono::{Duration as ChronoDuration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;
use std::time::Duration;
use validator::ValidateEmail;

use crate::domain::entities::{NewResetCode, NewUser, User};
use crate::domain::repositories::{ResetRepository, UserRepository};
use crate::error::AppError;
use crate::infrastructure::mail::Mailer;
use crate::utils::otp::generate_otp;

type HmacSha256 = Hmac<Sha256>;

/// Minimum length for usernames and passwords.
const MIN_CREDENTIAL_LENGTH: usize = 6;

/// Service for account lifecycle operations.
///
/// Passwords are stored as salted bcrypt hashes computed on the blocking
/// thread pool. Reset codes are stored HMAC-SHA256 hashed (keyed by
/// `signing_secret`) so a database leak does not expose live codes.
pub struct AccountService<U: UserRepository, R: ResetRepository> {
    users: Arc<U>,
    resets: Arc<R>,
    mailer: Arc<dyn Mailer>,
    signing_secret: String,
    reset_ttl: Duration,
}

impl<U: UserRepository, R: ResetRepository> AccountService<U, R> {
    /// Creates a new account service.
    pub fn new(
        users: Arc<U>,
        resets: Arc<R>,
        mailer: Arc<dyn Mailer>,
        signing_secret: String,
        reset_ttl: Duration,
    ) -> Self {
        Self {
            users,
            resets,
            mailer,
            signing_secret,
            reset_ttl,
        }
    }

    /// Registers a new account.
    ///
    /// Validation is ordered so clients always see the first failing rule:
    /// username length, password length, username charset, email syntax, then
    /// email uniqueness before username uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed input and
    /// [`AppError::Conflict`] when the email or username is taken.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        validate_registration(username, email, password)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(
                "Email is already in use",
                json!({ "field": "email" }),
            ));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                "Username is already taken",
                json!({ "field": "username" }),
            ));
        }

        let password_hash = hash_password(password.to_string()).await?;

        self.users
            .create(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
    }

    /// Verifies email/password credentials and returns the account.
    ///
    /// Unknown email and wrong password produce the identical error so the
    /// response does not reveal which field was wrong.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(wrong_credentials());
        };

        let matches = verify_password(password.to_string(), user.password_hash.clone()).await?;
        if !matches {
            return Err(wrong_credentials());
        }

        Ok(user)
    }

    /// Resolves an authenticated identity to its account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account no longer exists.
    pub async fn current_user(&self, user_id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": user_id })))
    }

    /// Replaces the password for an authenticated user.
    ///
    /// Outstanding tokens stay valid after the change.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthorized`] if `old_password` does not verify
    /// - [`AppError::Validation`] if the new password equals the old one,
    ///   the confirmation mismatches, or the new password is too short
    pub async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), AppError> {
        let user = self.current_user(user_id).await?;

        let matches =
            verify_password(old_password.to_string(), user.password_hash.clone()).await?;
        if !matches {
            return Err(AppError::unauthorized(
                "Old password is incorrect",
                json!({}),
            ));
        }

        if new_password == old_password {
            return Err(AppError::bad_request(
                "New password must differ from the old password",
                json!({ "field": "new_password" }),
            ));
        }

        if new_password != confirm_password {
            return Err(AppError::bad_request(
                "New passwords do not match",
                json!({ "field": "confirm_password" }),
            ));
        }

        if new_password.chars().count() < MIN_CREDENTIAL_LENGTH {
            return Err(AppError::bad_request(
                "Password must be at least 6 characters",
                json!({ "field": "new_password" }),
            ));
        }

        let password_hash = hash_password(new_password.to_string()).await?;
        self.users.update_password(user.id, &password_hash).await
    }

    /// Issues a password reset code and dispatches it by mail.
    ///
    /// The response never reveals whether the email is registered: for
    /// unknown addresses nothing is stored or sent, but the call still
    /// succeeds.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        if email.is_empty() {
            return Err(AppError::bad_request(
                "Email is required",
                json!({ "field": "email" }),
            ));
        }

        if self.users.find_by_email(email).await?.is_none() {
            tracing::debug!("password reset requested for unknown email");
            return Ok(());
        }

        let code = generate_otp();
        let ttl = ChronoDuration::seconds(self.reset_ttl.as_secs() as i64);

        self.resets
            .store(NewResetCode {
                email: email.to_string(),
                code_hash: self.hash_code(&code),
                expires_at: Utc::now() + ttl,
            })
            .await?;

        self.mailer.send_reset_code(email, &code).await
    }

    /// Completes a password reset using a previously issued code.
    ///
    /// The code is consumed on success and cannot be replayed.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the new password is too short
    /// - [`AppError::Unauthorized`] if no live code matches
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if new_password.chars().count() < MIN_CREDENTIAL_LENGTH {
            return Err(AppError::bad_request(
                "Password must be at least 6 characters",
                json!({ "field": "new_password" }),
            ));
        }

        let consumed = self.resets.consume(email, &self.hash_code(code)).await?;
        if !consumed {
            return Err(AppError::unauthorized(
                "Invalid or expired reset code",
                json!({}),
            ));
        }

        // A consumed code implies the account existed when it was issued;
        // treat a vanished account the same as a bad code.
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AppError::unauthorized(
                "Invalid or expired reset code",
                json!({}),
            ));
        };

        let password_hash = hash_password(new_password.to_string()).await?;
        self.users.update_password(user.id, &password_hash).await
    }

    /// Hashes a reset code with HMAC-SHA256 using the server signing secret.
    fn hash_code(&self, code: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(code.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Validates registration input, reporting the first failing rule.
fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), AppError> {
    if username.chars().count() < MIN_CREDENTIAL_LENGTH {
        return Err(AppError::bad_request(
            "Username must be at least 6 characters",
            json!({ "field": "username" }),
        ));
    }

    if password.chars().count() < MIN_CREDENTIAL_LENGTH {
        return Err(AppError::bad_request(
            "Password must be at least 6 characters",
            json!({ "field": "password" }),
        ));
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Username must be alphanumeric without spaces",
            json!({ "field": "username" }),
        ));
    }

    if !email.validate_email() {
        return Err(AppError::bad_request(
            "Email is invalid",
            json!({ "field": "email" }),
        ));
    }

    Ok(())
}

fn wrong_credentials() -> AppError {
    AppError::unauthorized("Wrong credentials", json!({}))
}

/// Hashes a password with bcrypt on the blocking thread pool.
async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::internal("Hashing task failed", json!({ "reason": e.to_string() })))?
        .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))
}

/// Verifies a password against a bcrypt hash on the blocking thread pool.
async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::internal("Hashing task failed", json!({ "reason": e.to_string() })))?
        .map_err(|e| {
            AppError::internal("Password verification failed", json!({ "reason": e.to_string() }))
        })
}
