use async_trait::async_trait;
use sqlx::PgPool;

use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::models::{User, UserRecord};

/// Storage abstraction for user accounts.
///
/// The identity service only depends on this capability set, so the
/// relational backend is pluggable (and mockable in tests).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user. The password must already be hashed; this layer
    /// never sees raw credentials.
    ///
    /// Returns `AppError::Conflict` if the username is taken.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError>;

    /// Looks up the full user record, hash included, by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError>;

    /// Checks a username/password pair against the stored hash.
    ///
    /// Returns the public user on success, `None` for an unknown username or
    /// a wrong password. Callers must not distinguish the two cases.
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        match self.find_by_username(username).await? {
            Some(record) => {
                if verify_password(password, &record.password_hash)? {
                    Ok(Some(record.into_public()))
                } else {
                    Ok(None)
                }
            }
            None => Ok(None),
        }
    }
}

/// Postgres-backed user store.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        // The unique index on username backstops concurrent registrations;
        // its violation surfaces as AppError::Conflict.
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash)
             VALUES ($1, $2)
             RETURNING id, username, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
