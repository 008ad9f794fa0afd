//! Account flow orchestration
//!
//! Composes the user store, OTP service, token service, and email sender
//! into the register → confirm → login → refresh → logout and
//! forgot/reset/delete sequences.

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::AccountService;
pub use traits::EmailServiceTrait;
