//! # Infrastructure Layer
//!
//! Concrete adapters behind the core's repository and service traits:
//! - **Database**: MySQL implementations using SQLx
//! - **Cache**: Redis-backed OTP cache and access-token blacklist
//! - **Email**: HTTP-API email sender, plus a logging sender for
//!   development

pub mod cache;
pub mod database;
pub mod email;

use thiserror::Error;

/// Errors raised by infrastructure adapters before they are mapped into
/// domain errors at the trait boundary
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email delivery error: {message}")]
    Email { message: String },
}
