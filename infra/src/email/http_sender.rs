//! HTTP-API email sender

use async_trait::async_trait;
use serde::Serialize;

use bms_core::services::account::EmailServiceTrait;

/// Configuration for the email provider API
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Provider endpoint for sending a single message
    pub api_url: String,

    /// Bearer token for the provider API
    pub api_key: String,

    /// Sender address stamped on every message
    pub from_address: String,
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("EMAIL_API_URL").unwrap_or_default(),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or_default(),
            from_address: std::env::var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "no-reply@bizmanage.test".to_string()),
        }
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Email sender backed by a transactional email provider's HTTP API
pub struct HttpEmailSender {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpEmailSender {
    /// Create a new sender with the given provider configuration
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EmailServiceTrait for HttpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let request = SendMessageRequest {
            from: &self.config.from_address,
            to,
            subject,
            text: body,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Email request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(
                status = %status,
                event = "email_send_failed",
                "Email provider rejected the message"
            );
            return Err(format!("Email provider returned {}", status));
        }

        tracing::debug!(event = "email_sent", "Email dispatched");
        Ok(())
    }
}
