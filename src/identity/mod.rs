//!
//! # Identity Service
//!
//! Account registration and credential-based login over a pluggable
//! [`UserStore`] backend. Tokens are issued here; they are never persisted.

pub mod store;

use std::sync::Arc;

use crate::auth::{generate_token, hash_password, AuthResponse};
use crate::config::JwtSettings;
use crate::error::AppError;

pub use store::{PgUserStore, UserStore};

/// Creates and authenticates user accounts and issues bearer tokens.
///
/// Cheap to clone; handlers receive it through `web::Data`.
#[derive(Clone)]
pub struct IdentityService {
    store: Arc<dyn UserStore>,
    jwt: JwtSettings,
}

impl IdentityService {
    pub fn new(store: Arc<dyn UserStore>, jwt: JwtSettings) -> Self {
        Self { store, jwt }
    }

    /// Registers a new account and signs the caller in.
    ///
    /// The raw password is hashed before it reaches the store and is never
    /// logged. A taken username yields `AppError::Conflict`.
    pub async fn register(&self, username: &str, password: &str) -> Result<AuthResponse, AppError> {
        if self.store.find_by_username(username).await?.is_some() {
            return Err(AppError::Conflict("Username already taken".into()));
        }

        let password_hash = hash_password(password)?;
        let user = self.store.create_user(username, &password_hash).await?;

        log::info!("registered user {} (id {})", user.username, user.id);

        let token = generate_token(user.id, &self.jwt)?;
        Ok(AuthResponse {
            token,
            user_id: user.id,
        })
    }

    /// Authenticates a username/password pair and issues a token.
    ///
    /// Unknown usernames and wrong passwords produce the same error, so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, AppError> {
        match self.store.verify_credentials(username, password).await? {
            Some(user) => {
                let token = generate_token(user.id, &self.jwt)?;
                Ok(AuthResponse {
                    token,
                    user_id: user.id,
                })
            }
            None => Err(AppError::Unauthorized("Invalid credentials".into())),
        }
    }
}
