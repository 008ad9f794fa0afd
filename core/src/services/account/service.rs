//! Main account service implementation

use std::sync::Arc;
use uuid::Uuid;

use bms_shared::utils::validation;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{BusinessRepository, TokenRepository, UserRepository};
use crate::services::otp::{OtpCacheTrait, OtpService};
use crate::services::token::{BlacklistTrait, TokenService};

use super::traits::EmailServiceTrait;

/// Orchestrates the account lifecycle over the user store, OTP service,
/// token service, business store, and email sender.
pub struct AccountService<U, T, B, C, E, R>
where
    U: UserRepository,
    T: TokenRepository,
    B: BlacklistTrait,
    C: OtpCacheTrait,
    E: EmailServiceTrait,
    R: BusinessRepository,
{
    users: Arc<U>,
    token_service: Arc<TokenService<T, B>>,
    otp_service: Arc<OtpService<C>>,
    email_service: Arc<E>,
    businesses: Arc<R>,
}

impl<U, T, B, C, E, R> AccountService<U, T, B, C, E, R>
where
    U: UserRepository,
    T: TokenRepository,
    B: BlacklistTrait,
    C: OtpCacheTrait,
    E: EmailServiceTrait,
    R: BusinessRepository,
{
    /// Create a new account service
    pub fn new(
        users: Arc<U>,
        token_service: Arc<TokenService<T, B>>,
        otp_service: Arc<OtpService<C>>,
        email_service: Arc<E>,
        businesses: Arc<R>,
    ) -> Self {
        Self {
            users,
            token_service,
            otp_service,
            email_service,
            businesses,
        }
    }

    async fn send_otp_email(&self, to: &str, subject: &str, body: String) -> DomainResult<()> {
        self.email_service
            .send_email(to, subject, &body)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "email_send_failed", "Failed to send email");
                DomainError::Auth(AuthError::EmailSendFailure)
            })
    }

    /// Check whether a username is free to register.
    ///
    /// # Returns
    /// * `Ok(true)` - Available
    /// * `Ok(false)` - Already taken
    pub async fn check_username_availability(&self, username: &str) -> DomainResult<bool> {
        if !validation::is_valid_username(username) {
            return Err(DomainError::validation(
                "Username must be between 3 and 50 characters with no spaces.",
            ));
        }

        Ok(self.users.find_by_username(username).await?.is_none())
    }

    /// Register a new identity and dispatch the email-confirmation OTP.
    ///
    /// No tokens are issued; the account stays unusable until the email is
    /// confirmed.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> DomainResult<()> {
        if !validation::is_valid_username(username) {
            return Err(DomainError::validation(
                "Username must be between 3 and 50 characters with no spaces.",
            ));
        }
        if !validation::looks_like_email(email) {
            return Err(DomainError::validation("A valid email address is required."));
        }
        if !validation::is_valid_password(password) {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters.",
                validation::MIN_PASSWORD_LENGTH
            )));
        }

        let user = self.users.create_user(username, email, password).await?;

        let otp = self.otp_service.generate(&user.email).await?;
        self.send_otp_email(
            &user.email,
            "Confirm your email",
            format!("Your OTP for email confirmation is: {}", otp),
        )
        .await?;

        tracing::info!(user_id = %user.id, event = "user_registered", "User registered");
        Ok(())
    }

    /// Confirm an email address with the OTP sent at registration
    pub async fn confirm_email(&self, email: &str, otp: &str) -> DomainResult<()> {
        let mut user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if !self.otp_service.validate(email, otp).await? {
            return Err(DomainError::Auth(AuthError::InvalidOrExpiredOtp));
        }

        user.confirm_email();
        self.users.update(&user).await?;
        self.otp_service.remove(email).await?;

        tracing::info!(user_id = %user.id, event = "email_confirmed", "Email confirmed");
        Ok(())
    }

    /// Authenticate and issue an access/refresh pair.
    ///
    /// Input containing `@` is resolved by email, anything else by
    /// username. Unknown identities and unconfirmed identities fail with
    /// one shared message so accounts cannot be enumerated.
    pub async fn login(&self, username_or_email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = if validation::looks_like_email(username_or_email) {
            self.users.find_by_email(username_or_email).await?
        } else {
            self.users.find_by_username(username_or_email).await?
        };

        let user = match user {
            Some(user) if user.email_confirmed => user,
            _ => return Err(DomainError::Auth(AuthError::InvalidUsernameOrEmail)),
        };

        if !self.users.verify_password(user.id, password).await? {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let pair = self.token_service.generate_token_pair(&user).await?;

        tracing::info!(user_id = %user.id, event = "user_logged_in", "User logged in");
        Ok(pair)
    }

    /// Exchange a refresh token for a new access/refresh pair.
    ///
    /// The presented token is consumed (single use) before the new pair is
    /// issued; replaying it afterwards fails.
    pub async fn refresh_token(&self, presented: &str) -> DomainResult<TokenPair> {
        let consumed = self.token_service.consume_refresh_token(presented).await?;

        let user = self
            .users
            .find_by_id(consumed.user_id)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidOrExpired))?;

        self.token_service.generate_token_pair(&user).await
    }

    /// Change the password of an authenticated user; the store verifies
    /// the current credential
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !validation::is_valid_password(new_password) {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters.",
                validation::MIN_PASSWORD_LENGTH
            )));
        }

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        self.users
            .change_password(user_id, current_password, new_password)
            .await?;

        tracing::info!(user_id = %user_id, event = "password_changed", "Password changed");
        Ok(())
    }

    /// Log out: blacklist the presented access token and delete the
    /// caller's live refresh token.
    ///
    /// At most one live refresh token per user is assumed; with concurrent
    /// sessions an arbitrary one is removed.
    pub async fn logout(&self, user_id: Uuid, access_token: &str) -> DomainResult<()> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        self.token_service.blacklist_access_token(access_token).await?;
        self.token_service.delete_live_refresh_token(user_id).await?;

        tracing::info!(user_id = %user_id, event = "user_logged_out", "User logged out");
        Ok(())
    }

    /// Start a password reset.
    ///
    /// Always succeeds with the same outcome whether or not the email is
    /// registered; the OTP is generated and sent only when it is.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        if let Some(user) = self.users.find_by_email(email).await? {
            let otp = self.otp_service.generate(&user.email).await?;
            self.send_otp_email(
                &user.email,
                "Password Reset OTP",
                format!("Your OTP is: {}", otp),
            )
            .await?;
            tracing::info!(user_id = %user.id, event = "password_reset_requested", "Password reset OTP sent");
        }
        Ok(())
    }

    /// Complete a password reset with the OTP from `forgot_password`
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !self.otp_service.validate(email, otp).await? {
            return Err(DomainError::Auth(AuthError::InvalidOrExpiredOtp));
        }

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if !validation::is_valid_password(new_password) {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters.",
                validation::MIN_PASSWORD_LENGTH
            )));
        }

        self.users.reset_password(user.id, new_password).await?;
        self.otp_service.remove(email).await?;

        tracing::info!(user_id = %user.id, event = "password_reset", "Password reset completed");
        Ok(())
    }

    /// Send the account-deletion OTP to the caller's own email
    pub async fn request_delete_account_otp(&self, user_id: Uuid) -> DomainResult<()> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let otp = self.otp_service.generate(&user.email).await?;
        self.send_otp_email(
            &user.email,
            "Account Deletion OTP",
            format!("Your OTP is: {}", otp),
        )
        .await?;
        Ok(())
    }

    /// Delete the caller's account after OTP verification; memberships
    /// cascade with the identity
    pub async fn delete_account(&self, user_id: Uuid, otp: &str) -> DomainResult<()> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if !self.otp_service.validate(&user.email, otp).await? {
            return Err(DomainError::Auth(AuthError::InvalidOrExpiredOtp));
        }

        self.users.delete_user(user_id).await?;
        self.businesses.delete_memberships_for_user(user_id).await?;
        self.otp_service.remove(&user.email).await?;

        tracing::info!(user_id = %user_id, event = "account_deleted", "Account deleted");
        Ok(())
    }
}
