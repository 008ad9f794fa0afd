//! One-time passcode entity for email-gated account operations.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of a generated passcode
pub const OTP_CODE_LENGTH: usize = 6;

/// Validity window for a generated passcode (10 minutes)
pub const OTP_EXPIRY_MINUTES: i64 = 10;

/// A one-time passcode keyed by an identity string (email).
///
/// At most one code is live per key: generating a new code for a key
/// replaces any prior one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// Identity key the code was issued for
    pub key: String,

    /// The 6-digit numeric code
    pub code: String,

    /// Timestamp when the code was generated
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpCode {
    /// Creates a new passcode for a key with the default validity window
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_expiry(key, OTP_EXPIRY_MINUTES)
    }

    /// Creates a new passcode with a custom validity window
    pub fn with_expiry(key: impl Into<String>, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            key: key.into(),
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiry_minutes),
        }
    }

    /// Generates a uniformly random 6-digit code in 100000..=999999.
    ///
    /// Uses the OS CSPRNG; codes always carry six significant digits, so
    /// validation is an exact string match with no leading-zero handling.
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Checks if the passcode has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
