//! Configuration for the authentication service

use realtor_shared::config::ProductKeyConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Secret mixed into product keys
    pub product_key_secret: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        ProductKeyConfig::default().into()
    }
}

impl From<ProductKeyConfig> for AuthServiceConfig {
    fn from(config: ProductKeyConfig) -> Self {
        Self {
            product_key_secret: config.secret,
        }
    }
}
