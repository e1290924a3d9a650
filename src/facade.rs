//! Request facade.
//!
//! The externally visible operations. Each one runs the credential gate and
//! then the mailbox or friend registry, inside the boundary retry.

use tracing::info;

use crate::auth::{CredentialGate, CredentialHasher, CredentialStore, RegistrationRequest};
use crate::config::Config;
use crate::db::{Database, User};
use crate::friend::{EmptyFriendsPolicy, FriendRegistry};
use crate::mail::{Mailbox, Message};
use crate::retry::{with_retry, RetryPolicy};
use crate::{PostboxError, Result};

/// Login detail for an active user with a matching password.
pub const LOGIN_SUCCESS: &str = "Login successful";
/// Login detail for an unknown user or a wrong password.
pub const LOGIN_INVALID: &str = "Invalid username or password";
/// Login detail for correct credentials on an inactive account.
pub const LOGIN_INACTIVE: &str = "User is not active. Please contact admin.";

/// Outcome of a login attempt, reported as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// One of [`LOGIN_SUCCESS`], [`LOGIN_INVALID`] or [`LOGIN_INACTIVE`].
    pub detail: &'static str,
}

impl LoginOutcome {
    fn from_gate(result: Result<User>) -> Result<Self> {
        let (success, detail) = match result {
            Ok(_) => (true, LOGIN_SUCCESS),
            Err(PostboxError::Unauthenticated) => (false, LOGIN_INVALID),
            Err(PostboxError::Inactive) => (false, LOGIN_INACTIVE),
            Err(e) => return Err(e),
        };
        Ok(Self { success, detail })
    }
}

/// Signup, login, messaging and friend operations over one storage handle.
pub struct RequestFacade {
    db: Database,
    hasher: CredentialHasher,
    retry: RetryPolicy,
    friends_policy: EmptyFriendsPolicy,
}

impl RequestFacade {
    /// Build the facade from configuration and an open database.
    pub fn new(config: &Config, db: Database) -> Result<Self> {
        Ok(Self {
            db,
            hasher: CredentialHasher::new(&config.security)?,
            retry: RetryPolicy::from(&config.retry),
            friends_policy: EmptyFriendsPolicy::from_flag(config.friends.empty_list_is_error),
        })
    }

    /// Get the underlying database.
    pub fn db(&self) -> &Database {
        &self.db
    }

    fn gate(&self) -> CredentialGate<'_> {
        CredentialGate::new(self.db.pool(), &self.hasher)
    }

    /// Register a new, inactive account.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<User> {
        with_retry(&self.retry, "signup", move || async move {
            CredentialStore::new(self.db.pool(), &self.hasher)
                .create(RegistrationRequest::new(username, email, password))
                .await
        })
        .await
    }

    /// Evaluate credentials and report the result.
    ///
    /// Bad credentials and inactive accounts are outcomes, not errors. Only
    /// storage failures come back as `Err`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let outcome = with_retry(&self.retry, "login", move || async move {
            LoginOutcome::from_gate(self.gate().admit(username, password).await)
        })
        .await?;

        info!(username = %username, success = outcome.success, "Login attempt");
        Ok(outcome)
    }

    /// Deposit `body` into `to_username`'s mailbox on behalf of `from_username`.
    pub async fn send_message(
        &self,
        from_username: &str,
        password: &str,
        to_username: &str,
        body: &str,
    ) -> Result<Message> {
        with_retry(&self.retry, "send_message", move || async move {
            let sender = self.gate().admit(from_username, password).await?;
            Mailbox::new(&self.db)
                .deposit(&sender.username, to_username, body)
                .await
        })
        .await
    }

    /// Return and clear the caller's mailbox.
    pub async fn scan_messages(&self, username: &str, password: &str) -> Result<Vec<Message>> {
        with_retry(&self.retry, "scan_messages", move || async move {
            let user = self.gate().admit(username, password).await?;
            Mailbox::new(&self.db).consume_all(&user.username).await
        })
        .await
    }

    /// Record `friend_username` in the caller's friend list.
    pub async fn save_friend(
        &self,
        username: &str,
        password: &str,
        friend_username: &str,
    ) -> Result<()> {
        with_retry(&self.retry, "save_friend", move || async move {
            let user = self.gate().admit(username, password).await?;
            self.friends()
                .add_friend(&user.username, friend_username)
                .await?;
            Ok(())
        })
        .await
    }

    /// List the caller's friends in insertion order.
    pub async fn get_friends(&self, username: &str, password: &str) -> Result<Vec<String>> {
        with_retry(&self.retry, "get_friends", move || async move {
            let user = self.gate().admit(username, password).await?;
            self.friends().list_friends(&user.username).await
        })
        .await
    }

    fn friends(&self) -> FriendRegistry<'_> {
        FriendRegistry::new(&self.db).with_empty_policy(self.friends_policy)
    }

    /// Close the storage handle.
    pub async fn close(&self) {
        self.db.close().await;
    }
}
