//! Shared fixtures for authentication service tests

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::user::{NewUser, User, UserId};
use crate::errors::DomainError;
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, SignupParams};
use crate::services::password::BcryptPasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

pub const TEST_PRODUCT_KEY_SECRET: &str = "test-product-key-secret";

/// Repository whose every call fails, standing in for an unavailable database
pub struct UnavailableUserRepository;

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn create(&self, _user: NewUser) -> Result<User, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        expires_in_seconds: 3600,
    }))
}

pub fn auth_service_with<U: UserRepository>(repo: Arc<U>) -> AuthService<U> {
    auth_service_with_secret(repo, TEST_PRODUCT_KEY_SECRET)
}

pub fn auth_service_with_secret<U: UserRepository>(repo: Arc<U>, secret: &str) -> AuthService<U> {
    AuthService::new(
        repo,
        Arc::new(BcryptPasswordHasher::new(4)),
        token_service(),
        AuthServiceConfig {
            product_key_secret: secret.to_string(),
        },
    )
}

pub fn auth_service() -> (AuthService<InMemoryUserRepository>, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    (auth_service_with(repo.clone()), repo)
}

pub fn signup_params(email: &str) -> SignupParams {
    SignupParams {
        email: email.to_string(),
        password: "correct horse".to_string(),
        name: "Taro".to_string(),
        phone: "090-1234-5678".to_string(),
    }
}
