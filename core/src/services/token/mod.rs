//! Token service module for JWT management
//!
//! Issues and verifies stateless HS256 session tokens carrying the user's
//! display name and id. Tokens are not stored; validity is signature plus
//! expiry.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
