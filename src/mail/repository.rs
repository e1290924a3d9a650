//! Message repository for Postbox.

use crate::db::DbPool;
use crate::Result;

use super::types::{Message, NewMessage};

/// Repository for pending messages.
pub struct MessageRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> MessageRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Append a message to the recipient's mailbox.
    pub async fn insert(&self, message: &NewMessage) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (from_username, to_username, body)
             VALUES (?, ?, ?)
             RETURNING id, from_username, to_username, body",
        )
        .bind(&message.from_username)
        .bind(&message.to_username)
        .bind(&message.body)
        .fetch_one(self.pool)
        .await?;
        Ok(message)
    }

    /// Remove and return every message addressed to `username`, oldest first.
    ///
    /// This is a single `DELETE ... RETURNING` statement, so a message is
    /// either returned here exactly once or left for a later call; concurrent
    /// takers and depositors are serialized by SQLite's write lock.
    pub async fn take_all(&self, username: &str) -> Result<Vec<Message>> {
        let mut messages = sqlx::query_as::<_, Message>(
            "DELETE FROM messages
             WHERE to_username = ?
             RETURNING id, from_username, to_username, body",
        )
        .bind(username)
        .fetch_all(self.pool)
        .await?;

        // RETURNING does not guarantee row order
        messages.sort_by_key(|m| m.id);
        Ok(messages)
    }

    /// Count pending messages for a recipient.
    pub async fn count_pending(&self, username: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE to_username = ?")
            .bind(username)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
