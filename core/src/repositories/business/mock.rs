//! In-memory implementation of BusinessRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::business::{Business, BusinessRole, Membership};
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

use super::r#trait::BusinessRepository;

#[derive(Default)]
struct State {
    businesses: HashMap<Uuid, Business>,
    memberships: Vec<Membership>,
}

/// Mock business repository for testing.
///
/// Holds the mock user store so the creation transaction can set the
/// creator's active-business pointer, mirroring the production
/// implementation's cross-table transaction.
pub struct MockBusinessRepository {
    state: Arc<RwLock<State>>,
    users: Arc<MockUserRepository>,
}

impl MockBusinessRepository {
    /// Create a new mock repository over the given mock user store
    pub fn new(users: Arc<MockUserRepository>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            users,
        }
    }
}

#[async_trait]
impl BusinessRepository for MockBusinessRepository {
    async fn create_with_super_owner(
        &self,
        business: Business,
        creator_id: Uuid,
    ) -> Result<Business, DomainError> {
        let mut user = self
            .users
            .find_by_id(creator_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let mut state = self.state.write().await;
        user.set_active_business(business.id);
        self.users.update(&user).await?;

        state.memberships.push(Membership::new(
            creator_id,
            business.id,
            BusinessRole::SuperOwner,
        ));
        state.businesses.insert(business.id, business.clone());
        Ok(business)
    }

    async fn find_business(&self, id: Uuid) -> Result<Option<Business>, DomainError> {
        let state = self.state.read().await;
        Ok(state.businesses.get(&id).cloned())
    }

    async fn update_business(&self, business: &Business) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.businesses.get_mut(&business.id) {
            Some(stored) => {
                *stored = business.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Business")),
        }
    }

    async fn delete_business(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let existed = state.businesses.remove(&id).is_some();
        if existed {
            state.memberships.retain(|m| m.business_id != id);
        }
        Ok(existed)
    }

    async fn find_membership(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> Result<Option<Membership>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .iter()
            .find(|m| m.user_id == user_id && m.business_id == business_id)
            .cloned())
    }

    async fn list_members(&self, business_id: Uuid) -> Result<Vec<Membership>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .iter()
            .filter(|m| m.business_id == business_id)
            .cloned()
            .collect())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Membership>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_membership(&self, membership: Membership) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.memberships.push(membership);
        Ok(())
    }

    async fn delete_membership(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let before = state.memberships.len();
        state
            .memberships
            .retain(|m| !(m.user_id == user_id && m.business_id == business_id));
        Ok(state.memberships.len() < before)
    }

    async fn delete_memberships_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut state = self.state.write().await;
        let before = state.memberships.len();
        state.memberships.retain(|m| m.user_id != user_id);
        Ok(before - state.memberships.len())
    }
}
