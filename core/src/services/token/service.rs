//! Main token service implementation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair, REFRESH_TOKEN_BYTES};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;
use super::traits::BlacklistTrait;

/// Service for the credential lifecycle: access token issuance and
/// verification, refresh token rotation, and logout blacklisting.
pub struct TokenService<R: TokenRepository, B: BlacklistTrait> {
    repository: Arc<R>,
    blacklist: Arc<B>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository, B: BlacklistTrait> TokenService<R, B> {
    /// Creates a new token service instance.
    ///
    /// Missing key material is a fatal startup condition: construction
    /// fails and no per-request signing error path exists.
    pub fn new(
        repository: Arc<R>,
        blacklist: Arc<B>,
        config: TokenServiceConfig,
    ) -> DomainResult<Self> {
        if config.jwt_secret.trim().is_empty() {
            return Err(DomainError::Token(TokenError::MissingSigningKey));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            repository,
            blacklist,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed, time-boxed access token bound to the user.
    ///
    /// Claim set: subject = username, fresh `jti`, user id, configured
    /// issuer/audience, expiry = now + configured TTL.
    pub fn issue_access_token(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new(
            &user.username,
            user.id,
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_expiry_minutes,
        );

        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Issues a refresh token for a user and records it in the ledger.
    ///
    /// The raw value is 256 bits from the OS CSPRNG, base64-encoded; only
    /// its SHA-256 hash is persisted. Returns the raw value, the single
    /// time it exists outside the caller's hands.
    pub async fn issue_refresh_token(&self, user_id: Uuid) -> DomainResult<String> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let raw = BASE64.encode(bytes);

        let token = RefreshToken::new(user_id, Self::hash_token(&raw));
        self.repository
            .save(token)
            .await
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))?;

        tracing::debug!(user_id = %user_id, event = "refresh_token_issued", "Issued refresh token");
        Ok(raw)
    }

    /// Issues a fresh access/refresh pair for a user
    pub async fn generate_token_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.issue_refresh_token(user.id).await?;
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Exchanges a presented refresh token, enforcing single use.
    ///
    /// The ledger's compare-and-swap marks the row used before anything is
    /// issued against it, so a stolen token replayed after a legitimate
    /// rotation is rejected, as is the legitimate token replayed after a
    /// theft. The consumed row stays in the ledger as an audit record.
    pub async fn consume_refresh_token(&self, presented: &str) -> DomainResult<RefreshToken> {
        let token_hash = Self::hash_token(presented);

        let token = self
            .repository
            .consume(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidOrExpired))?;

        if token.is_expired() {
            return Err(DomainError::Token(TokenError::InvalidOrExpired));
        }

        tracing::info!(user_id = %token.user_id, event = "refresh_token_rotated", "Refresh token exchanged");
        Ok(token)
    }

    /// Inserts a revocation marker for an access token; idempotent.
    ///
    /// Retention equals the full access-token lifetime, an upper bound on
    /// the remaining validity of any token presented for logout.
    pub async fn blacklist_access_token(&self, token: &str) -> DomainResult<()> {
        let ttl_seconds = (self.config.access_token_expiry_minutes * 60).max(0) as u64;

        self.blacklist
            .insert(token, ttl_seconds)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to blacklist token: {}", e)))?;

        tracing::info!(event = "access_token_blacklisted", "Access token blacklisted");
        Ok(())
    }

    /// Checks whether an access token has been blacklisted
    pub async fn is_blacklisted(&self, token: &str) -> DomainResult<bool> {
        self.blacklist
            .contains(token)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to check blacklist: {}", e)))
    }

    /// Verifies an access token and returns its claims.
    ///
    /// Strict pipeline: signature, then issuer/audience, then expiry, then
    /// the blacklist. A token failing any earlier stage never reaches the
    /// blacklist lookup.
    pub async fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => DomainError::Token(TokenError::Expired),
                    ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                    ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                        DomainError::Token(TokenError::InvalidClaims)
                    }
                    _ => DomainError::Token(TokenError::InvalidFormat),
                }
            })?;

        if self.is_blacklisted(token).await? {
            return Err(DomainError::Token(TokenError::Blacklisted));
        }

        Ok(token_data.claims)
    }

    /// Deletes the user's live refresh token from the ledger (logout)
    pub async fn delete_live_refresh_token(&self, user_id: Uuid) -> DomainResult<bool> {
        self.repository.delete_live_for_user(user_id).await
    }

    /// Removes expired refresh tokens from the ledger (passive sweep)
    pub async fn cleanup_expired_tokens(&self) -> DomainResult<usize> {
        self.repository.delete_expired().await
    }

    /// Hashes a raw refresh token for ledger storage and lookup
    pub(crate) fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
