//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

#[derive(Default)]
struct State {
    users: HashMap<Uuid, User>,
    // user id -> sha256 hex of the password; stand-in for the real store's
    // salted hash
    credentials: HashMap<Uuid, String>,
}

/// Mock user repository for testing
#[derive(Default)]
pub struct MockUserRepository {
    state: Arc<RwLock<State>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_password(password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.username == username) {
            return Err(DomainError::Auth(AuthError::UsernameTaken));
        }
        if state.users.values().any(|u| u.email == email) {
            return Err(DomainError::Conflict {
                message: "Email is already registered.".to_string(),
            });
        }

        let user = User::new(username, email);
        state
            .credentials
            .insert(user.id, Self::hash_password(password));
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(DomainError::Auth(AuthError::UserNotFound)),
        }
    }

    async fn verify_password(&self, user_id: Uuid, password: &str) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .credentials
            .get(&user_id)
            .map(|stored| *stored == Self::hash_password(password))
            .unwrap_or(false))
    }

    async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.credentials.get(&user_id) {
            Some(stored) if *stored == Self::hash_password(current_password) => {
                state
                    .credentials
                    .insert(user_id, Self::hash_password(new_password));
                Ok(())
            }
            Some(_) => Err(DomainError::Auth(AuthError::InvalidCredentials)),
            None => Err(DomainError::Auth(AuthError::UserNotFound)),
        }
    }

    async fn reset_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.credentials.contains_key(&user_id) {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }
        state
            .credentials
            .insert(user_id, Self::hash_password(new_password));
        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        state.credentials.remove(&user_id);
        Ok(state.users.remove(&user_id).is_some())
    }
}
