//! Authentication route handlers
//!
//! - Account signup, with a product key for privileged types
//! - Signin with email and password
//! - Product key generation for admins
//! - Current user lookup

pub mod me;
pub mod product_key;
pub mod signin;
pub mod signup;

use std::sync::Arc;

use realtor_core::repositories::UserRepository;
use realtor_core::services::auth::AuthService;

/// Application state that holds shared services
pub struct AppState<U>
where
    U: UserRepository,
{
    pub auth_service: Arc<AuthService<U>>,
}

impl<U: UserRepository> AppState<U> {
    pub fn new(auth_service: Arc<AuthService<U>>) -> Self {
        Self { auth_service }
    }
}
