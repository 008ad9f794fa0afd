//! Main OTP service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use crate::domain::entities::otp::OtpCode;
use crate::errors::{DomainError, DomainResult};

use super::config::OtpServiceConfig;
use super::traits::OtpCacheTrait;

/// Service for generating and validating one-time passcodes
pub struct OtpService<C: OtpCacheTrait> {
    cache: Arc<C>,
    config: OtpServiceConfig,
}

impl<C: OtpCacheTrait> OtpService<C> {
    /// Create a new OTP service over the given cache
    pub fn new(cache: Arc<C>, config: OtpServiceConfig) -> Self {
        Self { cache, config }
    }

    /// Generate a fresh code for a key.
    ///
    /// Any prior code for the key is overwritten: at most one code is live
    /// per key at a time, so a user who requests two codes in quick
    /// succession can only use the latest.
    pub async fn generate(&self, key: &str) -> DomainResult<String> {
        let code = OtpCode::generate_code();
        let ttl_seconds = (self.config.expiry_minutes * 60).max(0) as u64;

        self.cache
            .store_code(key, &code, ttl_seconds)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to store OTP: {}", e)))?;

        tracing::info!(key = key, event = "otp_generated", "Generated one-time passcode");
        Ok(code)
    }

    /// Check a supplied code against the live code for a key.
    ///
    /// Returns `false` for absent, expired, and mismatched codes alike;
    /// callers never learn which. Comparison is constant-time.
    pub async fn validate(&self, key: &str, code: &str) -> DomainResult<bool> {
        let stored = self
            .cache
            .get_code(key)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to read OTP: {}", e)))?;

        Ok(match stored {
            Some(stored) => {
                stored.len() == code.len() && constant_time_eq(stored.as_bytes(), code.as_bytes())
            }
            None => false,
        })
    }

    /// Invalidate the code for a key after successful use; idempotent
    pub async fn remove(&self, key: &str) -> DomainResult<()> {
        self.cache
            .remove_code(key)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to remove OTP: {}", e)))?;

        tracing::debug!(key = key, event = "otp_removed", "Removed one-time passcode");
        Ok(())
    }
}
