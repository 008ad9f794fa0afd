//! Business services containing domain logic and use cases.

pub mod account;
pub mod authorization;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use account::{AccountService, EmailServiceTrait};
pub use authorization::{
    policy, BusinessDetails, BusinessService, BusinessSummary, CreateBusinessData, MemberView,
};
pub use otp::{OtpCacheTrait, OtpService, OtpServiceConfig};
pub use token::{BlacklistTrait, TokenService, TokenServiceConfig};
