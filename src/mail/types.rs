//! Message types for Postbox.

/// An undelivered message waiting in a recipient's mailbox.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Message {
    /// Row ID; defines arrival order within a mailbox.
    pub id: i64,
    /// Sender username.
    pub from_username: String,
    /// Recipient username.
    pub to_username: String,
    /// Message text.
    pub body: String,
}

/// New message for deposit.
#[derive(Debug, Clone)]
pub struct NewMessage {
    /// Sender username.
    pub from_username: String,
    /// Recipient username.
    pub to_username: String,
    /// Message text.
    pub body: String,
}

impl NewMessage {
    /// Create a new message.
    pub fn new(
        from_username: impl Into<String>,
        to_username: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from_username: from_username.into(),
            to_username: to_username.into(),
            body: body.into(),
        }
    }
}
