//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Raw refresh token material length in bytes (256 bits)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// JWT ID, unique per issued token
    pub jti: String,

    /// User identifier
    pub uid: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a new access token
    pub fn new(
        username: &str,
        user_id: Uuid,
        issuer: &str,
        audience: &str,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            uid: user_id.to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.uid)
    }
}

/// Refresh token entity recorded in the ledger.
///
/// The raw token value is handed to the caller exactly once; the ledger
/// stores only its SHA-256 hash. A token is live while it is neither used
/// nor revoked nor past expiry. Rotation marks the presented row used and
/// keeps it as an audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the ledger row
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// SHA-256 hex digest of the raw token value
    pub token_hash: String,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been exchanged during rotation
    pub is_used: bool,

    /// Whether the token has been administratively revoked
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new refresh token ledger entry
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
            is_used: false,
            is_revoked: false,
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// A token is live iff it is unused, unrevoked, and unexpired
    pub fn is_live(&self) -> bool {
        !self.is_used && !self.is_revoked && !self.is_expired()
    }

    /// Marks the token as exchanged
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }

    /// Revokes the token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

/// Access/refresh token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
