//! Domain entities representing core business objects.

pub mod business;
pub mod otp;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use business::{Business, BusinessRole, Membership};
pub use otp::{OtpCode, OTP_CODE_LENGTH, OTP_EXPIRY_MINUTES};
pub use token::{Claims, RefreshToken, TokenPair, REFRESH_TOKEN_BYTES, REFRESH_TOKEN_EXPIRY_DAYS};
pub use user::User;
