//! User repository trait defining the interface to the credential store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for identity and password-credential operations.
///
/// Password hashing is owned entirely by the implementation; raw passwords
/// cross this boundary, hashes never do.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new identity with the given credentials.
    ///
    /// # Returns
    /// * `Ok(User)` - The created, unconfirmed user
    /// * `Err(DomainError)` - Username/email already taken, or store failure
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist changes to a user's mutable fields (email confirmation,
    /// active business pointer)
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Check a password against the stored credential.
    ///
    /// # Returns
    /// * `Ok(true)` - The password matches
    /// * `Ok(false)` - The password does not match
    async fn verify_password(&self, user_id: Uuid, password: &str) -> Result<bool, DomainError>;

    /// Replace the stored credential after verifying the current one.
    ///
    /// # Returns
    /// * `Err(AuthError::InvalidCredentials)` - The current password is wrong
    async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError>;

    /// Replace the stored credential without the current one (OTP-gated
    /// reset path; the reset authorization artifact is internal to the
    /// implementation)
    async fn reset_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError>;

    /// Delete an identity.
    ///
    /// # Returns
    /// * `Ok(true)` - The identity was deleted
    /// * `Ok(false)` - No identity with that id
    async fn delete_user(&self, user_id: Uuid) -> Result<bool, DomainError>;
}
