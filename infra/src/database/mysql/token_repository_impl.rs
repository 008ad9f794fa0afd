//! MySQL implementation of the TokenRepository trait.
//!
//! Rows live in `refresh_tokens`, keyed by the SHA-256 hash of the raw
//! token. The rotation compare-and-swap is an `UPDATE … WHERE is_used = 0
//! AND is_revoked = 0` with an affected-row check: MySQL serializes the
//! row update, so exactly one of two concurrent exchanges observes
//! `rows_affected == 1`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bms_core::domain::entities::token::RefreshToken;
use bms_core::errors::DomainError;
use bms_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid token UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| DomainError::internal(format!("Failed to get token_hash: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::internal(format!("Failed to get expires_at: {}", e)))?,
            is_used: row
                .try_get("is_used")
                .map_err(|e| DomainError::internal(format!("Failed to get is_used: {}", e)))?,
            is_revoked: row
                .try_get("is_revoked")
                .map_err(|e| DomainError::internal(format!("Failed to get is_revoked: {}", e)))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, created_at, expires_at, is_used, is_revoked
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(token.id.to_string())
        .bind(token.user_id.to_string())
        .bind(&token.token_hash)
        .bind(token.created_at)
        .bind(token.expires_at)
        .bind(token.is_used)
        .bind(token.is_revoked)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to save refresh token: {}", e)))?;

        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let result = sqlx::query(
            r#"
            SELECT id, user_id, token_hash, created_at, expires_at, is_used, is_revoked
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to find refresh token: {}", e)))?;

        result.as_ref().map(Self::row_to_token).transpose()
    }

    async fn consume(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET is_used = TRUE
            WHERE token_hash = ? AND is_used = FALSE AND is_revoked = FALSE
            "#,
        )
        .bind(token_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to consume refresh token: {}", e)))?;

        if result.rows_affected() == 0 {
            // Absent, already used, or revoked; the caller cannot tell and
            // must not be able to
            return Ok(None);
        }

        self.find_by_hash(token_hash).await
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE refresh_tokens SET is_revoked = TRUE WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to revoke refresh token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_live_for_user(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE user_id = ? AND is_used = FALSE AND is_revoked = FALSE
            LIMIT 1
            "#,
        )
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to delete refresh token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete expired tokens: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
