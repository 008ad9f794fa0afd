//! Business store: tenant rows and membership rows.

mod mock;
mod r#trait;

pub use mock::MockBusinessRepository;
pub use r#trait::BusinessRepository;
