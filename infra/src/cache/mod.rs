//! Cache module for Redis-backed shared state
//!
//! Provides the Redis implementations of the core's OTP cache and access
//! token blacklist traits. Both rely on Redis TTLs for expiry; nothing
//! here runs background sweeps.

mod otp_cache;
mod redis_client;
mod token_blacklist;


pub use otp_cache::RedisOtpCache;
pub use redis_client::RedisClient;
pub use token_blacklist::RedisTokenBlacklist;

// Re-export commonly used types
pub use bms_shared::config::CacheConfig;
