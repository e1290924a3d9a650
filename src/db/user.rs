//! User model for Postbox.

/// A registered account.
///
/// Immutable after creation except for `active`, which only the
/// administrative actor flips.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique row ID.
    pub id: i64,
    /// Login username (unique, case-sensitive).
    pub username: String,
    /// Email address given at signup.
    pub email: String,
    /// Password hash (Argon2 PHC string).
    pub password_hash: String,
    /// Whether the account has been approved.
    pub active: bool,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
///
/// New users always start inactive.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password hash (must already be hashed).
    pub password_hash: String,
}

impl NewUser {
    /// Create a new user record.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
