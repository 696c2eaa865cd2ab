//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::UserId;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for signing and verifying session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.config.expires_in_seconds
    }

    /// Signs a token for `(name, id)` valid for the configured window
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue_token(&self, name: &str, id: UserId) -> DomainResult<String> {
        self.issue_token_at(name, id, Utc::now())
    }

    /// Signs a token as if issued at `issued_at`
    pub(crate) fn issue_token_at(
        &self,
        name: &str,
        id: UserId,
        issued_at: DateTime<Utc>,
    ) -> DomainResult<String> {
        let claims =
            Claims::new(name, id, issued_at, self.config.expires_in_seconds).map_err(|e| {
                tracing::error!(
                    expires_in = self.config.expires_in_seconds,
                    "Token expiry out of range"
                );
                DomainError::Token(e)
            })?;
        self.encode_jwt(&claims)
    }

    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid and not expired
    /// * `Err(TokenError::TokenExpired)` - Past its expiry
    /// * `Err(TokenError::InvalidSignature)` - Signed with another secret or tampered
    /// * `Err(TokenError::InvalidTokenFormat)` - Anything else
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        Ok(token_data.claims)
    }
}
