//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier
pub type UserId = i64;

/// Account role
///
/// `Buyer` accounts are open to anyone. `Seller` and `Admin` accounts are
/// privileged and need a product key at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    /// Browses and enquires about listings
    Buyer,
    /// Publishes listings
    Seller,
    /// Operates the platform
    Admin,
}

impl UserType {
    /// Wire and database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Buyer => "BUYER",
            UserType::Seller => "SELLER",
            UserType::Admin => "ADMIN",
        }
    }

    /// Whether creating this account type requires a product key
    pub fn is_privileged(&self) -> bool {
        !matches!(self, UserType::Buyer)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUYER" => Ok(UserType::Buyer),
            "SELLER" => Ok(UserType::Seller),
            "ADMIN" => Ok(UserType::Admin),
            _ => Err(format!("Invalid user type: {}", s)),
        }
    }
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the store
    pub id: UserId,

    /// Login email, unique across users
    pub email: String,

    /// Display name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Account role
    pub user_type: UserType,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a stored user from its creation fields
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: new_user.email,
            name: new_user.name,
            phone: new_user.phone,
            password_hash: new_user.password_hash,
            user_type: new_user.user_type,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }
}

/// Fields required to create a user; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub password_hash: String,
    pub user_type: UserType,
}
