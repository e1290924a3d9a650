//! User repository for Postbox.
//!
//! This module provides the persistence side of the credential store.

use super::user::{NewUser, User};
use super::DbPool;
use crate::{PostboxError, Result};

const USER_COLUMNS: &str = "id, username, email, password_hash, active, created_at";

/// Repository for user records.
pub struct UserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new (inactive) user.
    ///
    /// The `UNIQUE` constraint on `username` decides concurrent signups of
    /// the same name; the loser gets [`PostboxError::DuplicateUsername`].
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let sql = format!(
            "INSERT INTO users (username, email, password_hash, active)
             VALUES (?, ?, ?, 0)
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&new_user.username)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                let unique_violation = e
                    .as_database_error()
                    .map(|db_err| db_err.is_unique_violation())
                    .unwrap_or(false);
                if unique_violation {
                    PostboxError::DuplicateUsername
                } else {
                    PostboxError::from(e)
                }
            })
    }

    /// Get a user by username (exact match).
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(self.pool)
            .await?;
        Ok(user)
    }

    /// Check if a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
                .bind(username)
                .fetch_one(self.pool)
                .await?;
        Ok(exists)
    }

    /// Set the active flag.
    ///
    /// Returns false if no such user exists.
    pub async fn set_active(&self, username: &str, active: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE users SET active = ? WHERE username = ?")
            .bind(active)
            .bind(username)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List users awaiting activation, oldest first.
    pub async fn list_inactive(&self) -> Result<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE active = 0 ORDER BY id");
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_user() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        let user = repo
            .create(&NewUser::new("alice", "a@x.com", "hashed"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password_hash, "hashed");
        assert!(!user.active);
        assert!(!user.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "a@x.com", "hashed"))
            .await
            .unwrap();
        let result = repo
            .create(&NewUser::new("alice", "other@x.com", "other"))
            .await;

        assert!(matches!(result, Err(PostboxError::DuplicateUsername)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_by_username() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "a@x.com", "hashed"))
            .await
            .unwrap();

        let found = repo.get_by_username("alice").await.unwrap();
        assert_eq!(found.unwrap().email, "a@x.com");

        assert!(repo.get_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_username_is_case_sensitive() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "a@x.com", "hashed"))
            .await
            .unwrap();

        assert!(repo.get_by_username("Alice").await.unwrap().is_none());
        assert!(repo
            .create(&NewUser::new("Alice", "A@x.com", "hashed"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_username_exists() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        assert!(!repo.username_exists("alice").await.unwrap());
        repo.create(&NewUser::new("alice", "a@x.com", "hashed"))
            .await
            .unwrap();
        assert!(repo.username_exists("alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_active() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("alice", "a@x.com", "hashed"))
            .await
            .unwrap();

        assert!(repo.set_active("alice", true).await.unwrap());
        assert!(repo.get_by_username("alice").await.unwrap().unwrap().active);

        assert!(repo.set_active("alice", false).await.unwrap());
        assert!(!repo.get_by_username("alice").await.unwrap().unwrap().active);

        assert!(!repo.set_active("nobody", true).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_inactive() {
        let db = setup_db().await;
        let repo = UserRepository::new(db.pool());

        for name in ["alice", "bob", "carol"] {
            repo.create(&NewUser::new(name, "x@x.com", "hashed"))
                .await
                .unwrap();
        }
        repo.set_active("bob", true).await.unwrap();

        let pending: Vec<String> = repo
            .list_inactive()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(pending, vec!["alice", "carol"]);
    }
}
