//! Token service tests

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockTokenRepository, TokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::MockBlacklist;

type TestService = TokenService<MockTokenRepository, MockBlacklist>;

fn service_with(config: TokenServiceConfig) -> TestService {
    TokenService::new(
        Arc::new(MockTokenRepository::new()),
        Arc::new(MockBlacklist::new()),
        config,
    )
    .unwrap()
}

fn service() -> TestService {
    service_with(TokenServiceConfig::new("test-signing-secret"))
}

fn user() -> User {
    User::new("alice", "alice@x.com")
}

#[tokio::test]
async fn test_missing_signing_key_is_fatal_at_construction() {
    let result = TokenService::new(
        Arc::new(MockTokenRepository::new()),
        Arc::new(MockBlacklist::new()),
        TokenServiceConfig::new("  "),
    );
    assert!(matches!(
        result.err(),
        Some(DomainError::Token(TokenError::MissingSigningKey))
    ));
}

#[tokio::test]
async fn test_issue_and_verify_access_token() {
    let service = service();
    let user = user();

    let token = service.issue_access_token(&user).unwrap();
    let claims = service.verify_access_token(&token).await.unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.iss, "bizmanage");
    assert_eq!(claims.aud, "bizmanage-api");
}

#[tokio::test]
async fn test_each_access_token_gets_fresh_jti() {
    let service = service();
    let user = user();

    let a = service.issue_access_token(&user).unwrap();
    let b = service.issue_access_token(&user).unwrap();
    let claims_a = service.verify_access_token(&a).await.unwrap();
    let claims_b = service.verify_access_token(&b).await.unwrap();

    assert_ne!(claims_a.jti, claims_b.jti);
}

#[tokio::test]
async fn test_tampered_token_fails_signature_check() {
    let service = service();
    let other = service_with(TokenServiceConfig::new("a-different-secret"));

    let token = other.issue_access_token(&user()).unwrap();
    let err = service.verify_access_token(&token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let mut config = TokenServiceConfig::new("test-signing-secret");
    config.access_token_expiry_minutes = -5;
    let service = service_with(config);

    let token = service.issue_access_token(&user()).unwrap();
    let err = service.verify_access_token(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn test_wrong_issuer_rejected() {
    let mut config = TokenServiceConfig::new("test-signing-secret");
    config.issuer = "someone-else".to_string();
    let other = service_with(config);
    let service = service();

    // Signed with the same key but carrying the wrong issuer claim
    let token = other.issue_access_token(&user()).unwrap();
    let err = service.verify_access_token(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidClaims)));
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let service = service();
    let err = service
        .verify_access_token("not-even-a-jwt")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidFormat)));
}

#[tokio::test]
async fn test_blacklisted_token_rejected_but_siblings_survive() {
    let service = service();
    let user = user();

    let revoked = service.issue_access_token(&user).unwrap();
    let surviving = service.issue_access_token(&user).unwrap();

    service.blacklist_access_token(&revoked).await.unwrap();

    let err = service.verify_access_token(&revoked).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Blacklisted)));

    // A different valid token for the same user is unaffected
    assert!(service.verify_access_token(&surviving).await.is_ok());
}

#[tokio::test]
async fn test_blacklisting_is_idempotent() {
    let service = service();
    let token = service.issue_access_token(&user()).unwrap();

    service.blacklist_access_token(&token).await.unwrap();
    service.blacklist_access_token(&token).await.unwrap();
    assert!(service.is_blacklisted(&token).await.unwrap());
}

#[tokio::test]
async fn test_refresh_token_is_opaque_base64_of_fixed_length() {
    let service = service();
    let raw = service.issue_refresh_token(user().id).await.unwrap();

    // 32 bytes of material -> 44 base64 characters
    assert_eq!(raw.len(), 44);
    assert!(raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
}

#[tokio::test]
async fn test_refresh_token_rotates_exactly_once() {
    let service = service();
    let user = user();

    let raw = service.issue_refresh_token(user.id).await.unwrap();

    let consumed = service.consume_refresh_token(&raw).await.unwrap();
    assert_eq!(consumed.user_id, user.id);

    let err = service.consume_refresh_token(&raw).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidOrExpired)
    ));
}

#[tokio::test]
async fn test_unknown_refresh_token_rejected() {
    let service = service();
    let err = service
        .consume_refresh_token("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidOrExpired)
    ));
}

#[tokio::test]
async fn test_expired_refresh_token_rejected() {
    use crate::domain::entities::token::RefreshToken;

    let repository = Arc::new(MockTokenRepository::new());
    let service = TokenService::new(
        Arc::clone(&repository),
        Arc::new(MockBlacklist::new()),
        TokenServiceConfig::new("test-signing-secret"),
    )
    .unwrap();

    // Seed the ledger with a row that expired yesterday
    let raw = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
    let mut token = RefreshToken::new(user().id, TestService::hash_token(raw));
    token.expires_at = chrono::Utc::now() - chrono::Duration::days(1);
    repository.save(token).await.unwrap();

    let err = service.consume_refresh_token(raw).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidOrExpired)
    ));
}

#[tokio::test]
async fn test_revoked_refresh_token_rejected() {
    let repository = Arc::new(MockTokenRepository::new());
    let service = TokenService::new(
        Arc::clone(&repository),
        Arc::new(MockBlacklist::new()),
        TokenServiceConfig::new("test-signing-secret"),
    )
    .unwrap();

    let raw = service.issue_refresh_token(user().id).await.unwrap();
    repository
        .revoke(&TestService::hash_token(&raw))
        .await
        .unwrap();

    let err = service.consume_refresh_token(&raw).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidOrExpired)
    ));
}

#[tokio::test]
async fn test_generate_token_pair_persists_refresh_token() {
    let repository = Arc::new(MockTokenRepository::new());
    let service = TokenService::new(
        Arc::clone(&repository),
        Arc::new(MockBlacklist::new()),
        TokenServiceConfig::new("test-signing-secret"),
    )
    .unwrap();
    let user = user();

    let pair = service.generate_token_pair(&user).await.unwrap();

    let hash = TestService::hash_token(&pair.refresh_token);
    let stored = repository.find_by_hash(&hash).await.unwrap().unwrap();
    assert_eq!(stored.user_id, user.id);
    assert!(stored.is_live());
}
