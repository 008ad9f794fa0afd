//! Business repository trait defining the interface to the tenant store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::business::{Business, Membership};
use crate::errors::DomainError;

/// Repository trait for business rows and membership rows.
///
/// Membership rows are keyed by (user id, business id); business rows by
/// business id.
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Create a business, grant the creator `SuperOwner`, and set the
    /// business as the creator's active business, one transactional unit:
    /// all three writes succeed or none do.
    async fn create_with_super_owner(
        &self,
        business: Business,
        creator_id: Uuid,
    ) -> Result<Business, DomainError>;

    /// Find a business by id
    async fn find_business(&self, id: Uuid) -> Result<Option<Business>, DomainError>;

    /// Persist changes to a business's fields
    async fn update_business(&self, business: &Business) -> Result<(), DomainError>;

    /// Delete a business and cascade its membership rows.
    ///
    /// # Returns
    /// * `Ok(true)` - The business was deleted
    /// * `Ok(false)` - No business with that id
    async fn delete_business(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Find one user's membership in one business
    async fn find_membership(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> Result<Option<Membership>, DomainError>;

    /// List all membership rows of a business
    async fn list_members(&self, business_id: Uuid) -> Result<Vec<Membership>, DomainError>;

    /// List all membership rows a user holds, across businesses
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Membership>, DomainError>;

    /// Insert a membership row
    async fn insert_membership(&self, membership: Membership) -> Result<(), DomainError>;

    /// Delete one user's membership in one business.
    ///
    /// # Returns
    /// * `Ok(true)` - The membership was deleted
    /// * `Ok(false)` - No such membership
    async fn delete_membership(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> Result<bool, DomainError>;

    /// Delete all memberships a user holds (identity deletion cascade)
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of membership rows deleted
    async fn delete_memberships_for_user(&self, user_id: Uuid) -> Result<usize, DomainError>;
}
