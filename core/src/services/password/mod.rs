//! Password hashing
//!
//! bcrypt is CPU-bound by design, so the bcrypt hasher runs on tokio's
//! blocking pool instead of the request task.

use async_trait::async_trait;

use crate::errors::{DomainError, DomainResult};

#[cfg(test)]
mod tests;

/// Slow, salted one-way hash used for passwords and product keys
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` with a fresh salt
    async fn hash(&self, plaintext: &str) -> DomainResult<String>;

    /// Check `plaintext` against a hash produced by [`PasswordHasher::hash`]
    ///
    /// A malformed `hash` is an error, not a mismatch.
    async fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool>;
}

/// bcrypt-backed hasher
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(realtor_shared::config::PasswordConfig::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to hash: {}", e)))
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Hash verification task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to verify hash: {}", e)))
    }
}
