//! Shared utilities and common types for the BizManage server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The uniform API response envelope
//! - Validation utilities (username/email format checks)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, OtpConfig,
};
pub use types::ApiResponse;
pub use utils::validation;
