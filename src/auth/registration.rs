//! Credential store for Postbox.
//!
//! Owns user records: lookup by username and signup.

use tracing::info;

use crate::auth::CredentialHasher;
use crate::db::{DbPool, NewUser, User, UserRepository};
use crate::{PostboxError, Result};

/// Signup data as received from the boundary (raw password).
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Raw password, hashed before it is stored.
    pub password: String,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User lookup and creation.
pub struct CredentialStore<'a> {
    pool: &'a DbPool,
    hasher: &'a CredentialHasher,
}

impl<'a> CredentialStore<'a> {
    /// Create a new credential store over the given pool.
    pub fn new(pool: &'a DbPool, hasher: &'a CredentialHasher) -> Self {
        Self { pool, hasher }
    }

    /// Look up a user by username.
    pub async fn lookup(&self, username: &str) -> Result<Option<User>> {
        UserRepository::new(self.pool).get_by_username(username).await
    }

    /// Register a new, inactive user.
    ///
    /// # Errors
    ///
    /// Returns [`PostboxError::DuplicateUsername`] if the username is taken,
    /// including when a concurrent signup for the same name wins the insert.
    pub async fn create(&self, request: RegistrationRequest) -> Result<User> {
        let repo = UserRepository::new(self.pool);

        // Fast path only; the UNIQUE constraint is what actually decides.
        if repo.username_exists(&request.username).await? {
            return Err(PostboxError::DuplicateUsername);
        }

        let password_hash = self.hasher.hash_blocking(request.password).await?;
        let user = repo
            .create(&NewUser::new(request.username, request.email, password_hash))
            .await?;

        info!(
            username = %user.username,
            user_id = user.id,
            "New user registered, activation pending"
        );

        Ok(user)
    }
}
