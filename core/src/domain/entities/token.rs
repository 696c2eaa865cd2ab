//! Token claims for JWT-based sessions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;
use crate::errors::TokenError;

/// Claims structure for the JWT payload
///
/// Carries only the display name and user id, plus the registered
/// timestamps needed for expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Display name of the user
    pub name: String,

    /// User id
    pub id: UserId,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims issued at `issued_at` and valid for `expires_in` seconds
    ///
    /// Fails with `TokenError::TokenGenerationFailed` when the expiry falls
    /// outside the representable date range.
    pub fn new(
        name: impl Into<String>,
        id: UserId,
        issued_at: DateTime<Utc>,
        expires_in: i64,
    ) -> Result<Self, TokenError> {
        let expiry = Duration::try_seconds(expires_in)
            .and_then(|window| issued_at.checked_add_signed(window))
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            name: name.into(),
            id,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        })
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
