//! Issuing and verification of access and refresh tokens.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::error::AppError;

/// Distinguishes the two token kinds so a refresh token can never be used as
/// an access token (or vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenUse {
    Access,
    Refresh,
}

/// JWT claims carried by both token kinds.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified per RFC 7519 `sub` conventions.
    pub sub: String,
    pub token_use: TokenUse,
    pub iat: u64,
    pub exp: u64,
}

/// An access/refresh token pair issued at login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Service for signing and verifying HS256 bearer tokens.
///
/// Access tokens are short-lived; refresh tokens are longer-lived and are
/// accepted only by the refresh endpoint. Refresh tokens are not rotated when
/// a new access token is minted.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Creates a new token service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC signing key shared by all instances of the service
    /// - `access_ttl` / `refresh_ttl` - token lifetimes
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // 60 seconds leeway for clock skew
        validation.leeway = 60;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issues an access/refresh pair for a user.
    pub fn issue_pair(&self, user_id: i64) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access: self.issue(user_id, TokenUse::Access)?,
            refresh: self.issue(user_id, TokenUse::Refresh)?,
        })
    }

    /// Issues a single token of the given kind.
    pub fn issue(&self, user_id: i64, token_use: TokenUse) -> Result<String, AppError> {
        let ttl = match token_use {
            TokenUse::Access => self.access_ttl,
            TokenUse::Refresh => self.refresh_ttl,
        };

        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: user_id.to_string(),
            token_use,
            iat: now,
            exp: now + ttl.as_secs(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("failed to sign token: {e}");
            AppError::internal("Failed to issue token", json!({}))
        })
    }

    /// Verifies a token and returns the bound user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the signature is invalid, the
    /// token is expired, or its kind does not match `expected_use`.
    pub fn verify(&self, token: &str, expected_use: TokenUse) -> Result<i64, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or expired token" }),
            )
        })?;

        if data.claims.token_use != expected_use {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Wrong token type" }),
            ));
        }

        data.claims.sub.parse::<i64>().map_err(|_| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "Malformed subject" }))
        })
    }
}
