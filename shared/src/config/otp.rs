//! One-time passcode configuration

use serde::{Deserialize, Serialize};

/// OTP configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Validity window for a generated code in minutes
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self { expiry_minutes: 10 }
    }
}

impl OtpConfig {
    /// Set the validity window in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.expiry_minutes = minutes;
        self
    }
}
