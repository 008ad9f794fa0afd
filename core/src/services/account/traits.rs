//! Email sender trait for account flow integration

use async_trait::async_trait;

/// Trait for outbound email delivery.
///
/// Fire-and-forget from the orchestrator's perspective: a failure surfaces
/// as a generic send error and is not retried here.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a message to an address
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
