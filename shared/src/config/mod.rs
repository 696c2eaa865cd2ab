//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing, password hashing and product key secrets
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, PasswordConfig, ProductKeyConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Errors raised when a loaded configuration cannot be used
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be set in {environment}")]
    DefaultSecret { name: &'static str, environment: Environment },

    #[error("bcrypt cost must be between {min} and {max}, got {actual}")]
    InvalidCost { min: u32, max: u32, actual: u32 },

    #[error("token expiry must be between 1 and {max} seconds, got {actual}")]
    InvalidExpiry { max: i64, actual: i64 },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Reject settings that must never reach a running server
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() {
            if self.auth.jwt.is_using_default_secret() {
                return Err(ConfigError::DefaultSecret {
                    name: "JSON_TOKEN_KEY",
                    environment: self.environment,
                });
            }
            if self.auth.product_key.is_using_default_secret() {
                return Err(ConfigError::DefaultSecret {
                    name: "PRODUCT_KEY_SECRET",
                    environment: self.environment,
                });
            }
        }

        let cost = self.auth.password.cost;
        if !(PasswordConfig::MIN_COST..=PasswordConfig::MAX_COST).contains(&cost) {
            return Err(ConfigError::InvalidCost {
                min: PasswordConfig::MIN_COST,
                max: PasswordConfig::MAX_COST,
                actual: cost,
            });
        }

        let expires_in = self.auth.jwt.expires_in;
        if !(1..=JwtConfig::MAX_EXPIRES_IN).contains(&expires_in) {
            return Err(ConfigError::InvalidExpiry {
                max: JwtConfig::MAX_EXPIRES_IN,
                actual: expires_in,
            });
        }

        Ok(())
    }
}
