//! Thin async Redis client wrapper
//!
//! Wraps a multiplexed connection and exposes the handful of keyed
//! operations the cache adapters need. An optional key prefix namespaces
//! all entries of one deployment.

use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use bms_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Async Redis client sharing one multiplexed connection
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
    key_prefix: Option<String>,
}

impl RedisClient {
    /// Connect to Redis using the given configuration
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection = client.get_multiplexed_tokio_connection().await?;

        tracing::info!(event = "redis_connected", "Connected to Redis");
        Ok(Self {
            connection,
            key_prefix: config.key_prefix.clone(),
        })
    }

    fn namespaced(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }

    /// Store a value under a key with a time-to-live in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(self.namespaced(key), value, ttl_seconds)
            .await?;
        Ok(())
    }

    /// Fetch the value for a key; `None` when absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut conn = self.connection.clone();
        Ok(conn.get(self.namespaced(key)).await?)
    }

    /// Check whether a key exists
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();
        Ok(conn.exists(self.namespaced(key)).await?)
    }

    /// Delete a key; no-op when absent
    pub async fn delete(&self, key: &str) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        conn.del::<_, ()>(self.namespaced(key)).await?;
        Ok(())
    }
}
