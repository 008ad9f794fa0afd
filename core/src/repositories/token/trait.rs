//! Token repository trait defining the interface for refresh token
//! persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for the refresh token ledger.
///
/// Tokens are keyed by the SHA-256 hash of their raw value; the raw value
/// itself is never persisted. Rotation safety rests on `consume`: it must
/// serialize per token row so two concurrent exchanges of the same token
/// cannot both succeed.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token to the ledger
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g. duplicate hash)
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Atomically mark a live token as used and return it.
    ///
    /// This is the rotation compare-and-swap: the mark-used write succeeds
    /// only while the row is neither used nor revoked, and implementations
    /// must guarantee at most one caller observes success per row (row
    /// lock, or an `UPDATE … WHERE is_used = 0` affected-row check). The
    /// row is retained afterwards as an audit record.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - The token, now marked used; the caller
    ///   must still reject it if expired
    /// * `Ok(None)` - No such token, or it was already used or revoked
    async fn consume(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke a specific refresh token
    ///
    /// # Returns
    /// * `Ok(true)` - Token was revoked
    /// * `Ok(false)` - Token not found
    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete the user's live (unused, unrevoked) refresh token, if any.
    ///
    /// Logout cleanup. At most one live token per user is assumed; with
    /// concurrent sessions an arbitrary one is removed.
    ///
    /// # Returns
    /// * `Ok(true)` - A token row was deleted
    /// * `Ok(false)` - No live token existed
    async fn delete_live_for_user(&self, user_id: Uuid) -> Result<bool, DomainError>;

    /// Delete expired refresh tokens from the ledger (passive sweep)
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired rows deleted
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
