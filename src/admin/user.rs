//! User administration service.

use tracing::info;

use crate::db::{Database, User, UserRepository};
use crate::{PostboxError, Result};

/// Activates and deactivates accounts.
pub struct UserAdminService<'a> {
    db: &'a Database,
}

impl<'a> UserAdminService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Mark a user active so they can send, scan and manage friends.
    pub async fn activate(&self, username: &str) -> Result<User> {
        self.set_active(username, true).await
    }

    /// Mark a user inactive. Pending messages addressed to them are kept.
    pub async fn deactivate(&self, username: &str) -> Result<User> {
        self.set_active(username, false).await
    }

    /// Users still waiting for activation.
    pub async fn pending(&self) -> Result<Vec<User>> {
        UserRepository::new(self.db.pool()).list_inactive().await
    }

    async fn set_active(&self, username: &str, active: bool) -> Result<User> {
        let repo = UserRepository::new(self.db.pool());
        if !repo.set_active(username, active).await? {
            return Err(PostboxError::UserNotFound);
        }

        info!(username = %username, active, "Account status changed");

        repo.get_by_username(username)
            .await?
            .ok_or(PostboxError::UserNotFound)
    }
}
