//! Credential gate.
//!
//! Every mailbox and friend operation passes through [`CredentialGate::admit`].
//! Login evaluates the same two checks but reports the outcome instead of
//! failing; that interpretation lives in the facade, not here.

use tracing::debug;

use super::registration::CredentialStore;
use super::CredentialHasher;
use crate::db::{DbPool, User};
use crate::{PostboxError, Result};

/// Authenticate + authorize checks over the credential store.
pub struct CredentialGate<'a> {
    store: CredentialStore<'a>,
    hasher: &'a CredentialHasher,
}

impl<'a> CredentialGate<'a> {
    /// Create a gate over the given pool.
    pub fn new(pool: &'a DbPool, hasher: &'a CredentialHasher) -> Self {
        Self {
            store: CredentialStore::new(pool, hasher),
            hasher,
        }
    }

    /// Check a username/password pair.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`PostboxError::Unauthenticated`].
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let Some(user) = self.store.lookup(username).await? else {
            debug!(username = %username, "Authentication failed: unknown user");
            return Err(PostboxError::Unauthenticated);
        };

        if !self
            .hasher
            .matches(password.to_string(), user.password_hash.clone())
            .await
        {
            debug!(username = %username, "Authentication failed: wrong password");
            return Err(PostboxError::Unauthenticated);
        }

        Ok(user)
    }

    /// Check that an authenticated user has been activated.
    pub fn authorize(user: &User) -> Result<()> {
        if user.active {
            Ok(())
        } else {
            Err(PostboxError::Inactive)
        }
    }

    /// Authenticate, then authorize.
    pub async fn admit(&self, username: &str, password: &str) -> Result<User> {
        let user = self.authenticate(username, password).await?;
        Self::authorize(&user)?;
        Ok(user)
    }
}
