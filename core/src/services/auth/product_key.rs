//! Product key material
//!
//! A product key is a bcrypt hash over the SHA-256 digest of
//! `{email}-{USER_TYPE}-{secret}`. The digest keeps the hashed input at 64
//! hex bytes, inside bcrypt's 72-byte limit, for any email and secret
//! length. Each generation uses a fresh salt, so keys are checked with
//! bcrypt verify and never by string equality.

use sha2::{Digest, Sha256};

use crate::domain::entities::user::UserType;

/// Build the fixed-width string that gets hashed into a product key
pub(crate) fn product_key_material(email: &str, user_type: UserType, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}-{}-{}", email, user_type, secret).as_bytes());
    format!("{:x}", hasher.finalize())
}
