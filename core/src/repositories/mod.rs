//! Repository interfaces for persistence, with in-memory mocks for tests.

pub mod business;
pub mod token;
pub mod user;

pub use business::BusinessRepository;
pub use token::TokenRepository;
pub use user::UserRepository;

pub use business::MockBusinessRepository;
pub use token::MockTokenRepository;
pub use user::MockUserRepository;
