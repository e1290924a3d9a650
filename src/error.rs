//! Error types for Postbox.

use thiserror::Error;

/// SQLite primary result codes that indicate lock contention.
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

/// Common error type for Postbox.
#[derive(Error, Debug)]
pub enum PostboxError {
    /// Signup with a username that is already registered.
    #[error("username already exists")]
    DuplicateUsername,

    /// Unknown username or wrong password.
    ///
    /// The two cases are deliberately indistinguishable.
    #[error("invalid username or password")]
    Unauthenticated,

    /// Valid credentials, but the account has not been activated yet.
    #[error("user is not active")]
    Inactive,

    /// Message addressed to a username that does not exist.
    #[error("recipient user not found")]
    RecipientNotFound,

    /// Friend list lookup found no edges for the owner.
    #[error("no friends found")]
    NoFriendsFound,

    /// A user referenced by an operation does not exist.
    #[error("user not found")]
    UserNotFound,

    /// The store did not answer in time or is temporarily unreachable.
    ///
    /// This is the only error worth retrying.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Non-transient database error.
    #[error("database error: {0}")]
    Database(String),

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PostboxError {
    /// Whether a retry at the boundary may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, PostboxError::StorageUnavailable(_))
    }
}

impl From<sqlx::Error> for PostboxError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_) => PostboxError::StorageUnavailable(e.to_string()),
            sqlx::Error::Database(db_err) if is_lock_contention(db_err.code().as_deref()) => {
                PostboxError::StorageUnavailable(e.to_string())
            }
            _ => PostboxError::Database(e.to_string()),
        }
    }
}

/// Check an SQLite (possibly extended) result code for BUSY / LOCKED.
fn is_lock_contention(code: Option<&str>) -> bool {
    code.and_then(|c| c.parse::<i32>().ok())
        .map(|c| matches!(c & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
        .unwrap_or(false)
}

/// Result type alias for Postbox operations.
pub type Result<T> = std::result::Result<T, PostboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        assert_eq!(
            PostboxError::DuplicateUsername.to_string(),
            "username already exists"
        );
        assert_eq!(
            PostboxError::Unauthenticated.to_string(),
            "invalid username or password"
        );
        assert_eq!(PostboxError::Inactive.to_string(), "user is not active");
        assert_eq!(
            PostboxError::RecipientNotFound.to_string(),
            "recipient user not found"
        );
        assert_eq!(PostboxError::NoFriendsFound.to_string(), "no friends found");
    }

    #[test]
    fn test_only_storage_unavailable_is_transient() {
        assert!(PostboxError::StorageUnavailable("timeout".to_string()).is_transient());
        assert!(!PostboxError::Unauthenticated.is_transient());
        assert!(!PostboxError::Inactive.is_transient());
        assert!(!PostboxError::DuplicateUsername.is_transient());
        assert!(!PostboxError::Database("syntax".to_string()).is_transient());
    }

    #[test]
    fn test_pool_timeout_maps_to_storage_unavailable() {
        let err: PostboxError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, PostboxError::StorageUnavailable(_)));

        let err: PostboxError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, PostboxError::StorageUnavailable(_)));
    }

    #[test]
    fn test_row_not_found_is_permanent() {
        let err: PostboxError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, PostboxError::Database(_)));
    }

    #[test]
    fn test_lock_contention_codes() {
        assert!(is_lock_contention(Some("5")));
        assert!(is_lock_contention(Some("6")));
        // SQLITE_BUSY_SNAPSHOT (extended code of BUSY)
        assert!(is_lock_contention(Some("517")));
        assert!(!is_lock_contention(Some("2067")));
        assert!(!is_lock_contention(None));
        assert!(!is_lock_contention(Some("not-a-number")));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PostboxError = io_err.into();
        assert!(matches!(err, PostboxError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }
}
