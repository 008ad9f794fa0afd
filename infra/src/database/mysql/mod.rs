//! MySQL repository implementations

mod business_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use business_repository_impl::MySqlBusinessRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
