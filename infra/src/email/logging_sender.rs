//! Logging email sender for development

use async_trait::async_trait;

use bms_core::services::account::EmailServiceTrait;

/// Email sender that logs messages instead of delivering them.
///
/// OTP codes end up in the log, so this is for development environments
/// only.
#[derive(Debug, Default, Clone)]
pub struct LoggingEmailSender;

impl LoggingEmailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailServiceTrait for LoggingEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        tracing::info!(
            to = to,
            subject = subject,
            body = body,
            event = "email_logged",
            "Email (not delivered, logging sender)"
        );
        Ok(())
    }
}
