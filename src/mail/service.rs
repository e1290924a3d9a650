//! Mailbox service for Postbox.
//!
//! Deposit and consume for per-recipient mailboxes. Callers must have
//! passed the credential gate before calling in.

use tracing::info;

use crate::db::{Database, UserRepository};
use crate::{PostboxError, Result};

use super::repository::MessageRepository;
use super::types::{Message, NewMessage};

/// Per-recipient store-and-forward mailbox.
pub struct Mailbox<'a> {
    db: &'a Database,
}

impl<'a> Mailbox<'a> {
    /// Create a new Mailbox with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Deposit a message for `to_username`.
    ///
    /// No depth limit and no deduplication: every call appends one message.
    ///
    /// # Errors
    ///
    /// Returns [`PostboxError::RecipientNotFound`] if the recipient does not exist.
    pub async fn deposit(
        &self,
        from_username: &str,
        to_username: &str,
        body: &str,
    ) -> Result<Message> {
        let recipient = UserRepository::new(self.db.pool())
            .get_by_username(to_username)
            .await?;
        if recipient.is_none() {
            return Err(PostboxError::RecipientNotFound);
        }

        let message = MessageRepository::new(self.db.pool())
            .insert(&NewMessage::new(from_username, to_username, body))
            .await?;

        info!(
            from = %from_username,
            to = %to_username,
            message_id = message.id,
            "Message deposited"
        );

        Ok(message)
    }

    /// Atomically return and remove every message for `username`, in arrival order.
    ///
    /// An empty mailbox yields an empty vector.
    pub async fn consume_all(&self, username: &str) -> Result<Vec<Message>> {
        let messages = MessageRepository::new(self.db.pool())
            .take_all(username)
            .await?;

        info!(
            username = %username,
            count = messages.len(),
            "Mailbox consumed"
        );

        Ok(messages)
    }
}
