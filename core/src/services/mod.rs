//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, SigninParams, SignupParams};
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use token::{TokenService, TokenServiceConfig};
