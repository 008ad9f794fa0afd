//! Refresh token ledger: persistence for issued refresh tokens.

mod mock;
mod r#trait;

pub use mock::MockTokenRepository;
pub use r#trait::TokenRepository;
