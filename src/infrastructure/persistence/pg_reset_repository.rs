//! PostgreSQL implementation of the reset code repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::NewResetCode;
use crate::domain::repositories::ResetRepository;
use crate::error::AppError;

/// PostgreSQL repository for one-time password reset codes.
pub struct PgResetRepository {
    pool: Arc<PgPool>,
}

impl PgResetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResetRepository for PgResetRepository {
    async fn store(&self, code: NewResetCode) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO password_reset_codes (email, code_hash, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&code.email)
        .bind(&code.code_hash)
        .bind(code.expires_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn consume(&self, email: &str, code_hash: &str) -> Result<bool, AppError> {
        // One-shot consumption: the same UPDATE that matches the code also
        // marks it consumed, so a replay can never succeed.
        let result = sqlx::query(
            r#"
            UPDATE password_reset_codes
            SET consumed_at = now()
            WHERE email = $1
              AND code_hash = $2
              AND consumed_at IS NULL
              AND expires_at > now()
            "#,
        )
        .bind(email)
        .bind(code_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
