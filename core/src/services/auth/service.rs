//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::user::{NewUser, User, UserId, UserType};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::{BcryptPasswordHasher, PasswordHasher};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::product_key::product_key_material;

/// Signup input
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// Signin input
#[derive(Debug, Clone)]
pub struct SigninParams {
    pub email: String,
    pub password: String,
}

/// Authentication service for signup, signin and product keys
pub struct AuthService<U, H = BcryptPasswordHasher>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Slow hash for passwords and product keys
    password_hasher: Arc<H>,
    /// Token service for JWT signing
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, H> AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `password_hasher` - Hasher for passwords and product keys
    /// * `token_service` - Service for JWT signing
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
            config,
        }
    }

    /// Token service used to sign session tokens
    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    /// Create an account and return a session token for it
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Signed token for the new user
    /// * `Err(AuthError::UserAlreadyExists)` - Email already registered
    /// * `Err(DomainError)` - Store or hashing failure
    pub async fn signup(&self, params: SignupParams, user_type: UserType) -> DomainResult<String> {
        if self
            .user_repository
            .find_by_email(&params.email)
            .await?
            .is_some()
        {
            tracing::info!(user_type = %user_type, "Signup rejected: email already registered");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(&params.password).await?;

        // The store re-checks uniqueness for signups racing past the lookup above
        let user = self
            .user_repository
            .create(NewUser {
                email: params.email,
                name: params.name,
                phone: params.phone,
                password_hash,
                user_type,
            })
            .await?;

        tracing::info!(user_id = user.id, user_type = %user.user_type, "User signed up");

        self.issue_token(&user.name, user.id)
    }

    /// Signup that enforces the product key for privileged account types
    ///
    /// `Buyer` accounts ignore `product_key`. Other types need a key that
    /// verifies for this exact email and type.
    pub async fn register(
        &self,
        params: SignupParams,
        user_type: UserType,
        product_key: Option<&str>,
    ) -> DomainResult<String> {
        if user_type.is_privileged() {
            let product_key = product_key
                .filter(|key| !key.is_empty())
                .ok_or(AuthError::ProductKeyRequired)?;

            if !self
                .verify_product_key(&params.email, user_type, product_key)
                .await?
            {
                tracing::warn!(user_type = %user_type, "Signup rejected: invalid product key");
                return Err(AuthError::InvalidProductKey.into());
            }
        }

        self.signup(params, user_type).await
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password yield the same
    /// `AuthError::InvalidCredentials`.
    pub async fn signin(&self, params: SigninParams) -> DomainResult<String> {
        let user = match self.user_repository.find_by_email(&params.email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("Signin failed: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let is_valid_password = self
            .password_hasher
            .verify(&params.password, &user.password_hash)
            .await?;

        if !is_valid_password {
            tracing::debug!(user_id = user.id, "Signin failed: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = user.id, "User signed in");

        self.issue_token(&user.name, user.id)
    }

    /// Generate a product key for creating a `user_type` account as `email`
    ///
    /// Each call returns a differently salted hash. Check keys with
    /// [`AuthService::verify_product_key`], never by equality.
    pub async fn generate_product_key(&self, email: &str, user_type: UserType) -> DomainResult<String> {
        let material = product_key_material(email, user_type, &self.config.product_key_secret);
        let product_key = self.password_hasher.hash(&material).await?;

        tracing::info!(user_type = %user_type, "Product key generated");

        Ok(product_key)
    }

    /// Check a presented product key against `email` and `user_type`
    ///
    /// Malformed keys verify as `false`.
    pub async fn verify_product_key(
        &self,
        email: &str,
        user_type: UserType,
        product_key: &str,
    ) -> DomainResult<bool> {
        let material = product_key_material(email, user_type, &self.config.product_key_secret);

        match self.password_hasher.verify(&material, product_key).await {
            Ok(valid) => Ok(valid),
            Err(e) => {
                tracing::debug!(error = %e, "Product key could not be verified");
                Ok(false)
            }
        }
    }

    /// Look up a user by id
    pub async fn find_user(&self, id: UserId) -> DomainResult<Option<User>> {
        self.user_repository.find_by_id(id).await
    }

    /// Load the user behind `id` and require the `Admin` type
    pub async fn require_admin(&self, id: UserId) -> DomainResult<User> {
        let user = self
            .find_user(id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_admin() {
            return Err(AuthError::InsufficientPermissions.into());
        }

        Ok(user)
    }

    fn issue_token(&self, name: &str, id: UserId) -> DomainResult<String> {
        self.token_service.issue_token(name, id)
    }
}
