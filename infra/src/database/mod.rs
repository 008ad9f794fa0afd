//! Database module - MySQL implementations using SQLx

pub mod mysql;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use bms_shared::config::DatabaseConfig;

use crate::InfrastructureError;

pub use mysql::{MySqlBusinessRepository, MySqlTokenRepository, MySqlUserRepository};

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await?;

    tracing::info!(event = "database_connected", "Connected to MySQL");
    Ok(pool)
}
