//! Redis implementation of the access token blacklist
//!
//! Key pattern: `token:blacklist:{raw access token}`. Entries carry a TTL
//! no shorter than the access token lifetime and expire on their own, so
//! the set stays bounded without a sweeper.

use async_trait::async_trait;
use tracing::debug;

use bms_core::services::token::BlacklistTrait;

use super::redis_client::RedisClient;

const BLACKLIST_KEY_PREFIX: &str = "token:blacklist";

/// Redis-backed access token blacklist
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    redis_client: RedisClient,
}

impl RedisTokenBlacklist {
    /// Create a new blacklist over the given Redis client
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }

    pub(crate) fn format_key(token: &str) -> String {
        format!("{}:{}", BLACKLIST_KEY_PREFIX, token)
    }
}

#[async_trait]
impl BlacklistTrait for RedisTokenBlacklist {
    async fn insert(&self, token: &str, ttl_seconds: u64) -> Result<(), String> {
        debug!(event = "token_blacklisted", "Inserting blacklist marker");
        self.redis_client
            .set_with_expiry(&Self::format_key(token), "revoked", ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn contains(&self, token: &str) -> Result<bool, String> {
        self.redis_client
            .exists(&Self::format_key(token))
            .await
            .map_err(|e| e.to_string())
    }
}
