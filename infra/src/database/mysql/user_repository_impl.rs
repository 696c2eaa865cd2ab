//! MySQL implementation of the UserRepository trait.
//!
//! Email uniqueness is enforced by the `uk_users_email` index, so racing
//! signups surface here as a unique-key violation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use realtor_core::domain::entities::user::{NewUser, User, UserId, UserType};
use realtor_core::errors::{AuthError, DomainError};
use realtor_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let user_type: String = row
            .try_get("user_type")
            .map_err(|e| DomainError::Database(format!("Failed to get user_type: {}", e)))?;

        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::Database(format!("Failed to get phone: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database(format!("Failed to get password_hash: {}", e)))?,
            user_type: user_type
                .parse::<UserType>()
                .map_err(DomainError::Database)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

/// Unique-key violations on insert become a signup conflict
fn map_insert_error(error: sqlx::Error) -> DomainError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            AuthError::UserAlreadyExists.into()
        }
        _ => DomainError::Database(format!("Failed to create user: {}", error)),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, name, phone, password_hash, user_type,
                   created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, name, phone, password_hash, user_type,
                   created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let now = Utc::now();

        let query = r#"
            INSERT INTO users (
                email, name, phone, password_hash, user_type,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.phone)
            .bind(&user.password_hash)
            .bind(user.user_type.as_str())
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        let id = UserId::try_from(result.last_insert_id())
            .map_err(|e| DomainError::Database(format!("Invalid user id: {}", e)))?;

        tracing::debug!(user_id = id, "User row inserted");

        Ok(User {
            id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            password_hash: user.password_hash,
            user_type: user.user_type,
            created_at: now,
            updated_at: now,
        })
    }
}
