//! Token service configuration

use bms_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret key material for HS256 signing
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Issuer claim stamped on and required of every access token
    pub issuer: String,

    /// Audience claim stamped on and required of every access token
    pub audience: String,
}

impl TokenServiceConfig {
    /// Create a configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            access_token_expiry_minutes: jwt.access_token_expiry_minutes,
            issuer: jwt.issuer,
            audience: jwt.audience,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            issuer: config.issuer,
            audience: config.audience,
        }
    }
}
