//! User identity entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered identity.
///
/// The password credential itself is owned by the user store and never
/// appears on the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Login name, unique across the system
    pub username: String,

    /// Email address, unique across the system
    pub email: String,

    /// Whether the email address has been confirmed via OTP
    pub email_confirmed: bool,

    /// The business the user is currently operating in, if any
    pub active_business_id: Option<Uuid>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unconfirmed user
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            email_confirmed: false,
            active_business_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the email address as confirmed
    pub fn confirm_email(&mut self) {
        self.email_confirmed = true;
        self.updated_at = Utc::now();
    }

    /// Points the user at a business as their active workspace
    pub fn set_active_business(&mut self, business_id: Uuid) {
        self.active_business_id = Some(business_id);
        self.updated_at = Utc::now();
    }
}
