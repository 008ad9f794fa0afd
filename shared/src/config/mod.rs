//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `otp` - One-time passcode configuration
//! - `cache` - Redis cache configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod otp;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use otp::OtpConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Redis cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// OTP configuration
    #[serde(default)]
    pub otp: OtpConfig,
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    ///
    /// Reads a `.env` file first when present, then falls back to process
    /// environment variables with per-section defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            environment: Environment::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            jwt: JwtConfig::from_env(),
            otp: OtpConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            jwt: JwtConfig::default(),
            otp: OtpConfig::default(),
        }
    }
}
