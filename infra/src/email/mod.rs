//! Email delivery adapters
//!
//! `HttpEmailSender` posts messages to a transactional email provider's
//! HTTP API; `LoggingEmailSender` writes them to the log instead, for
//! development and tests.

mod http_sender;
mod logging_sender;

pub use http_sender::{EmailConfig, HttpEmailSender};
pub use logging_sender::LoggingEmailSender;
