//! Friendship repository for Postbox.

use crate::db::DbPool;
use crate::Result;

use super::types::Friendship;

/// Repository for friendship edges.
pub struct FriendRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> FriendRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Append one edge.
    pub async fn insert(&self, owner_username: &str, friend_username: &str) -> Result<Friendship> {
        let friendship = sqlx::query_as::<_, Friendship>(
            "INSERT INTO friendships (owner_username, friend_username)
             VALUES (?, ?)
             RETURNING id, owner_username, friend_username, created_at",
        )
        .bind(owner_username)
        .bind(friend_username)
        .fetch_one(self.pool)
        .await?;
        Ok(friendship)
    }

    /// List friend usernames recorded by `owner_username`, in insertion order.
    pub async fn list_friend_names(&self, owner_username: &str) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT friend_username FROM friendships WHERE owner_username = ? ORDER BY id",
        )
        .bind(owner_username)
        .fetch_all(self.pool)
        .await?;
        Ok(names)
    }
}
