//! Domain entities representing core business objects.

pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

pub use token::Claims;
pub use user::{NewUser, User, UserId, UserType};
