//! MySQL implementation of the UserRepository trait.
//!
//! Identity rows live in `users`; password credentials are bcrypt hashes
//! in the same table and never leave this module.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bms_core::domain::entities::user::User;
use bms_core::errors::{AuthError, DomainError};
use bms_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let active_business_id: Option<String> = row
            .try_get("active_business_id")
            .map_err(|e| DomainError::internal(format!("Failed to get active_business_id: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::internal(format!("Failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            email_confirmed: row
                .try_get("email_confirmed")
                .map_err(|e| DomainError::internal(format!("Failed to get email_confirmed: {}", e)))?,
            active_business_id: active_business_id
                .map(|id| Uuid::parse_str(&id))
                .transpose()
                .map_err(|e| DomainError::internal(format!("Invalid business UUID: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT id, username, email, email_confirmed, active_business_id, created_at, updated_at \
             FROM users WHERE {} = ? LIMIT 1",
            column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find user: {}", e)))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn password_hash(&self, user_id: Uuid) -> Result<Option<String>, DomainError> {
        let row = sqlx::query("SELECT password_hash FROM users WHERE id = ? LIMIT 1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to read credential: {}", e)))?;

        row.map(|r| {
            r.try_get("password_hash")
                .map_err(|e| DomainError::internal(format!("Failed to get password_hash: {}", e)))
        })
        .transpose()
    }

    async fn store_password_hash(&self, user_id: Uuid, hash: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(hash)
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to store credential: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        if self.find_by_username(username).await?.is_some() {
            return Err(DomainError::Auth(AuthError::UsernameTaken));
        }
        if self.find_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict {
                message: "Email is already registered.".to_string(),
            });
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))?;

        let user = User::new(username, email);
        sqlx::query(
            r#"
            INSERT INTO users (
                id, username, email, email_confirmed, password_hash,
                active_business_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, NULL, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.email_confirmed)
        .bind(&password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to create user: {}", e)))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("id", &id.to_string()).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_one("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email).await
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = ?, email = ?, email_confirmed = ?,
                active_business_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.email_confirmed)
        .bind(user.active_business_id.map(|id| id.to_string()))
        .bind(user.updated_at)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to update user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }
        Ok(())
    }

    async fn verify_password(&self, user_id: Uuid, password: &str) -> Result<bool, DomainError> {
        match self.password_hash(user_id).await? {
            Some(hash) => bcrypt::verify(password, &hash)
                .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e))),
            None => Ok(false),
        }
    }

    async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let hash = self
            .password_hash(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let matches = bcrypt::verify(current_password, &hash)
            .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))?;
        if !matches {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let new_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))?;
        self.store_password_hash(user_id, &new_hash).await
    }

    async fn reset_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError> {
        if self.password_hash(user_id).await?.is_none() {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }

        let new_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))?;
        self.store_password_hash(user_id, &new_hash).await
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
