//! Error families for authentication, token, and role authorization
//! operations.
//!
//! Message texts are the user-visible strings; several are deliberately
//! vague. Login failures never distinguish an unknown identity from an
//! unconfirmed one, and OTP failures never distinguish expiry from
//! mismatch. Enumeration resistance is part of the contract, not
//! presentation polish.

use thiserror::Error;

/// Authentication and account-flow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown identity or unconfirmed email; the two cases share one
    /// message so callers cannot probe which accounts exist
    #[error("Invalid username or email.")]
    InvalidUsernameOrEmail,

    #[error("Invalid password.")]
    InvalidCredentials,

    #[error("User not found.")]
    UserNotFound,

    #[error("Username is already taken.")]
    UsernameTaken,

    /// Expired and mismatched codes are indistinguishable to the caller
    #[error("Invalid or expired OTP.")]
    InvalidOrExpiredOtp,

    #[error("Failed to send email.")]
    EmailSendFailure,
}

/// Token validation and refresh errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired.")]
    Expired,

    #[error("Token signature verification failed.")]
    InvalidSignature,

    #[error("Invalid token format.")]
    InvalidFormat,

    #[error("Invalid token claims.")]
    InvalidClaims,

    #[error("Token has been revoked.")]
    Blacklisted,

    /// Refresh-specific: absent, used, revoked, and expired tokens all
    /// collapse into this one error
    #[error("Invalid or expired refresh token.")]
    InvalidOrExpired,

    #[error("Token generation failed.")]
    GenerationFailed,

    /// Fatal startup condition: the service refuses to construct without
    /// key material
    #[error("JWT signing key is not configured.")]
    MissingSigningKey,
}

/// Role authorization errors for business-scoped actions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// The acting user holds no role in the business; distinct from
    /// holding a role that is too weak
    #[error("User is not associated with the business.")]
    NotAssociated,

    #[error("Insufficient permissions.")]
    InsufficientRole,

    #[error("User is already assigned to this business.")]
    AlreadyMember,

    /// Each business has exactly one SuperOwner
    #[error("SuperOwner role cannot be assigned to another user.")]
    DuplicateSuperOwner,

    #[error("Cannot remove SuperOwner role.")]
    CannotRemoveSuperOwner,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_login_errors_share_no_detail() {
        // Unknown user and unconfirmed user must produce identical text
        let message = AuthError::InvalidUsernameOrEmail.to_string();
        assert_eq!(message, "Invalid username or email.");
    }

    #[test]
    fn test_otp_error_is_ambiguous() {
        let message = AuthError::InvalidOrExpiredOtp.to_string();
        assert!(!message.contains("expired") || !message.contains("mismatch"));
        assert_eq!(message, "Invalid or expired OTP.");
    }

    #[test]
    fn test_error_families_bridge_into_domain_error() {
        let err: DomainError = TokenError::InvalidOrExpired.into();
        assert_eq!(err.to_string(), "Invalid or expired refresh token.");

        let err: DomainError = RoleError::NotAssociated.into();
        assert_eq!(err.to_string(), "User is not associated with the business.");
    }
}
