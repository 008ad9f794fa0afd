//! MySQL implementation of the BusinessRepository trait.
//!
//! Business rows live in `businesses`, membership rows in
//! `user_business_roles`. Business creation spans three tables (business,
//! membership, creator's active-business pointer) inside one transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bms_core::domain::entities::business::{Business, BusinessRole, Membership};
use bms_core::errors::DomainError;
use bms_core::repositories::BusinessRepository;

/// MySQL implementation of BusinessRepository
pub struct MySqlBusinessRepository {
    pool: MySqlPool,
}

impl MySqlBusinessRepository {
    /// Create a new MySQL business repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_business(row: &sqlx::mysql::MySqlRow) -> Result<Business, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;

        Ok(Business {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid business UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::internal(format!("Failed to get description: {}", e)))?,
            address: row
                .try_get("address")
                .map_err(|e| DomainError::internal(format!("Failed to get address: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::internal(format!("Failed to get phone: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    fn row_to_membership(row: &sqlx::mysql::MySqlRow) -> Result<Membership, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;
        let business_id: String = row
            .try_get("business_id")
            .map_err(|e| DomainError::internal(format!("Failed to get business_id: {}", e)))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::internal(format!("Failed to get role: {}", e)))?;

        Ok(Membership {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid membership UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            business_id: Uuid::parse_str(&business_id)
                .map_err(|e| DomainError::internal(format!("Invalid business UUID: {}", e)))?,
            role: role
                .parse::<BusinessRole>()
                .map_err(|e| DomainError::internal(e))?,
        })
    }
}

#[async_trait]
impl BusinessRepository for MySqlBusinessRepository {
    async fn create_with_super_owner(
        &self,
        business: Business,
        creator_id: Uuid,
    ) -> Result<Business, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO businesses (
                id, name, description, address, phone, email, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(business.id.to_string())
        .bind(&business.name)
        .bind(&business.description)
        .bind(&business.address)
        .bind(&business.phone)
        .bind(&business.email)
        .bind(business.created_at)
        .bind(business.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to insert business: {}", e)))?;

        let membership = Membership::new(creator_id, business.id, BusinessRole::SuperOwner);
        sqlx::query(
            "INSERT INTO user_business_roles (id, user_id, business_id, role) VALUES (?, ?, ?, ?)",
        )
        .bind(membership.id.to_string())
        .bind(membership.user_id.to_string())
        .bind(membership.business_id.to_string())
        .bind(membership.role.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to insert membership: {}", e)))?;

        let updated = sqlx::query("UPDATE users SET active_business_id = ?, updated_at = ? WHERE id = ?")
            .bind(business.id.to_string())
            .bind(Utc::now())
            .bind(creator_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to set active business: {}", e)))?;

        if updated.rows_affected() == 0 {
            // Creator vanished mid-flight; roll everything back
            return Err(DomainError::not_found("User"));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to commit transaction: {}", e)))?;

        Ok(business)
    }

    async fn find_business(&self, id: Uuid) -> Result<Option<Business>, DomainError> {
        let result = sqlx::query(
            r#"
            SELECT id, name, description, address, phone, email, created_at, updated_at
            FROM businesses
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to find business: {}", e)))?;

        result.as_ref().map(Self::row_to_business).transpose()
    }

    async fn update_business(&self, business: &Business) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE businesses
            SET name = ?, description = ?, address = ?, phone = ?, email = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&business.name)
        .bind(&business.description)
        .bind(&business.address)
        .bind(&business.phone)
        .bind(&business.email)
        .bind(business.updated_at)
        .bind(business.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to update business: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Business"));
        }
        Ok(())
    }

    async fn delete_business(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query("DELETE FROM user_business_roles WHERE business_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete memberships: {}", e)))?;

        let result = sqlx::query("DELETE FROM businesses WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete business: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to commit transaction: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_membership(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> Result<Option<Membership>, DomainError> {
        let result = sqlx::query(
            r#"
            SELECT id, user_id, business_id, role
            FROM user_business_roles
            WHERE user_id = ? AND business_id = ?
            LIMIT 1
            "#,
        )
        .bind(user_id.to_string())
        .bind(business_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to find membership: {}", e)))?;

        result.as_ref().map(Self::row_to_membership).transpose()
    }

    async fn list_members(&self, business_id: Uuid) -> Result<Vec<Membership>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, user_id, business_id, role FROM user_business_roles WHERE business_id = ?",
        )
        .bind(business_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to list members: {}", e)))?;

        rows.iter().map(Self::row_to_membership).collect()
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Membership>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, user_id, business_id, role FROM user_business_roles WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to list memberships: {}", e)))?;

        rows.iter().map(Self::row_to_membership).collect()
    }

    async fn insert_membership(&self, membership: Membership) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO user_business_roles (id, user_id, business_id, role) VALUES (?, ?, ?, ?)",
        )
        .bind(membership.id.to_string())
        .bind(membership.user_id.to_string())
        .bind(membership.business_id.to_string())
        .bind(membership.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to insert membership: {}", e)))?;

        Ok(())
    }

    async fn delete_membership(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> Result<bool, DomainError> {
        let result =
            sqlx::query("DELETE FROM user_business_roles WHERE user_id = ? AND business_id = ?")
                .bind(user_id.to_string())
                .bind(business_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::internal(format!("Failed to delete membership: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_memberships_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM user_business_roles WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete memberships: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
