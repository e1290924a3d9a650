//! Friendship types for Postbox.

/// A directed friendship edge.
///
/// Edges are never deduplicated: saving the same pair twice stores two edges.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Friendship {
    /// Row ID; defines insertion order.
    pub id: i64,
    /// User who recorded the edge.
    pub owner_username: String,
    /// Recorded friend name (not required to be a registered user).
    pub friend_username: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// How an empty friend list is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyFriendsPolicy {
    /// Fail with `NoFriendsFound`.
    #[default]
    Error,
    /// Return an empty list.
    EmptyList,
}

impl EmptyFriendsPolicy {
    /// Build the policy from the `friends.empty_list_is_error` switch.
    pub fn from_flag(empty_list_is_error: bool) -> Self {
        if empty_list_is_error {
            EmptyFriendsPolicy::Error
        } else {
            EmptyFriendsPolicy::EmptyList
        }
    }
}
