//! OTP service configuration

use bms_shared::config::OtpConfig;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Validity window for a generated code in minutes
    pub expiry_minutes: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: crate::domain::entities::otp::OTP_EXPIRY_MINUTES,
        }
    }
}

impl From<OtpConfig> for OtpServiceConfig {
    fn from(config: OtpConfig) -> Self {
        Self {
            expiry_minutes: config.expiry_minutes,
        }
    }
}
