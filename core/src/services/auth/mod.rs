//! Authentication service module
//!
//! - User signup and signin
//! - Session token issuance
//! - Product keys gating privileged account types

mod config;
mod product_key;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, SigninParams, SignupParams};
