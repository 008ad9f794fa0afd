//! Blacklist trait for access token revocation storage

use async_trait::async_trait;

/// Trait for the revocation set backing logged-out access tokens.
///
/// Keys are raw access-token strings. Entries must be retained at least as
/// long as the token's own lifetime and may expire afterwards. Inserts are
/// idempotent; lookups are O(1).
#[async_trait]
pub trait BlacklistTrait: Send + Sync {
    /// Insert a revocation marker for a token
    async fn insert(&self, token: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Check whether a token carries a revocation marker
    async fn contains(&self, token: &str) -> Result<bool, String>;
}
