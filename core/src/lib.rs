//! # BizManage Core
//!
//! Core identity and authorization layer for the BizManage backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture: credential lifecycle (access tokens, rotating refresh
//! tokens, logout blacklist), OTP-gated account flows, and the per-business
//! role hierarchy.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
