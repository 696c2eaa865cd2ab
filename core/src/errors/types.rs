//! Error types for authentication, token handling and input validation
//!
//! Messages here are safe to show to clients. `InvalidCredentials` is the
//! single outcome for both an unknown email and a wrong password.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("A product key is required for this account type")]
    ProductKeyRequired,

    #[error("Invalid product key")]
    InvalidProductKey,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Invalid user type: {value}")]
    InvalidUserType { value: String },
}
