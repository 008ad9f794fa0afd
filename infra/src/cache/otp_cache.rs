//! Redis implementation of the OTP cache
//!
//! Key pattern: `otp:code:{identity key}`. Redis TTLs enforce the
//! validity window; a SETEX on an existing key overwrites the prior code,
//! which is exactly the one-live-code-per-key semantics the OTP service
//! expects.

use async_trait::async_trait;
use tracing::debug;

use bms_core::services::otp::OtpCacheTrait;

use super::redis_client::RedisClient;

const OTP_KEY_PREFIX: &str = "otp:code";

/// Redis-backed OTP cache
#[derive(Clone)]
pub struct RedisOtpCache {
    redis_client: RedisClient,
}

impl RedisOtpCache {
    /// Create a new OTP cache over the given Redis client
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }

    pub(crate) fn format_key(key: &str) -> String {
        format!("{}:{}", OTP_KEY_PREFIX, key)
    }
}

#[async_trait]
impl OtpCacheTrait for RedisOtpCache {
    async fn store_code(&self, key: &str, code: &str, ttl_seconds: u64) -> Result<(), String> {
        debug!(event = "otp_stored", "Storing one-time passcode");
        self.redis_client
            .set_with_expiry(&Self::format_key(key), code, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get_code(&self, key: &str) -> Result<Option<String>, String> {
        self.redis_client
            .get(&Self::format_key(key))
            .await
            .map_err(|e| e.to_string())
    }

    async fn remove_code(&self, key: &str) -> Result<(), String> {
        self.redis_client
            .delete(&Self::format_key(key))
            .await
            .map_err(|e| e.to_string())
    }
}
