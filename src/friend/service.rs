//! Friend registry service for Postbox.

use tracing::info;

use crate::db::{Database, UserRepository};
use crate::{PostboxError, Result};

use super::repository::FriendRepository;
use super::types::{EmptyFriendsPolicy, Friendship};

/// Append-only store of named friends per user.
pub struct FriendRegistry<'a> {
    db: &'a Database,
    empty_policy: EmptyFriendsPolicy,
}

impl<'a> FriendRegistry<'a> {
    /// Create a registry with the default empty-list policy.
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            empty_policy: EmptyFriendsPolicy::default(),
        }
    }

    /// Set how an empty friend list is reported.
    pub fn with_empty_policy(mut self, policy: EmptyFriendsPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Record `friend_username` as a friend of `owner_username`.
    ///
    /// Only the owner must exist; the friend name is stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`PostboxError::UserNotFound`] if the owner does not exist.
    pub async fn add_friend(
        &self,
        owner_username: &str,
        friend_username: &str,
    ) -> Result<Friendship> {
        // TODO: decide whether the friend (not just the owner) must be registered.
        let owner = UserRepository::new(self.db.pool())
            .get_by_username(owner_username)
            .await?;
        if owner.is_none() {
            return Err(PostboxError::UserNotFound);
        }

        let friendship = FriendRepository::new(self.db.pool())
            .insert(owner_username, friend_username)
            .await?;

        info!(
            owner = %owner_username,
            friend = %friend_username,
            "Friend saved"
        );

        Ok(friendship)
    }

    /// List the friend usernames recorded by `username`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`PostboxError::NoFriendsFound`] for an empty list unless the
    /// registry was built with [`EmptyFriendsPolicy::EmptyList`].
    pub async fn list_friends(&self, username: &str) -> Result<Vec<String>> {
        let friends = FriendRepository::new(self.db.pool())
            .list_friend_names(username)
            .await?;

        if friends.is_empty() && self.empty_policy == EmptyFriendsPolicy::Error {
            return Err(PostboxError::NoFriendsFound);
        }

        Ok(friends)
    }
}
