//! Authentication configuration: token signing, password hashing and product keys

use serde::{Deserialize, Serialize};

const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";
const DEFAULT_PRODUCT_KEY_SECRET: &str = "development-product-key-secret";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            expires_in: Self::DEFAULT_EXPIRES_IN,
        }
    }
}

impl JwtConfig {
    /// Default token lifetime (3,600,000 seconds)
    pub const DEFAULT_EXPIRES_IN: i64 = 3_600_000;

    /// Longest accepted token lifetime (ten years)
    pub const MAX_EXPIRES_IN: i64 = 315_360_000;

    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in seconds
    pub fn with_expires_in(mut self, seconds: i64) -> Self {
        self.expires_in = seconds;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor
    pub cost: u32,
}

impl PasswordConfig {
    pub const DEFAULT_COST: u32 = 10;
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }
}

/// Product key configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductKeyConfig {
    /// Server-side secret mixed into every product key
    pub secret: String,
}

impl Default for ProductKeyConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_PRODUCT_KEY_SECRET),
        }
    }
}

impl ProductKeyConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_PRODUCT_KEY_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Product key configuration
    #[serde(default)]
    pub product_key: ProductKeyConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JSON_TOKEN_KEY")
            .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let expires_in = std::env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(JwtConfig::DEFAULT_EXPIRES_IN);
        let cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(PasswordConfig::DEFAULT_COST);
        let product_key_secret = std::env::var("PRODUCT_KEY_SECRET")
            .unwrap_or_else(|_| DEFAULT_PRODUCT_KEY_SECRET.to_string());

        Self {
            jwt: JwtConfig { secret, expires_in },
            password: PasswordConfig { cost },
            product_key: ProductKeyConfig::new(product_key_secret),
        }
    }
}
