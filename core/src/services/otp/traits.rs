//! Cache trait for OTP storage integration

use async_trait::async_trait;

/// Trait for the keyed cache backing OTP storage.
///
/// Implementations need key-level atomicity only; overwriting an existing
/// key is last-writer-wins. Entries expire on their own after the given
/// time-to-live.
#[async_trait]
pub trait OtpCacheTrait: Send + Sync {
    /// Store a code under a key, replacing any prior code for that key
    async fn store_code(&self, key: &str, code: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Fetch the live code for a key; `None` when absent or expired
    async fn get_code(&self, key: &str) -> Result<Option<String>, String>;

    /// Remove the code for a key; no-op when absent
    async fn remove_code(&self, key: &str) -> Result<(), String>;
}
