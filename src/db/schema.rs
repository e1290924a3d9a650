//! Database schema and migrations for Postbox.
//!
//! Migrations are applied in order when the database is opened.
//! The schema_version table tracks which migrations have been applied.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: users
    r#"
CREATE TABLE users (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    username        TEXT NOT NULL UNIQUE,
    email           TEXT NOT NULL,
    password_hash   TEXT NOT NULL,           -- Argon2 PHC string
    active          INTEGER NOT NULL DEFAULT 0,
    created_at      TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
    // v2: pending messages, one row per undelivered message
    r#"
CREATE TABLE messages (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,   -- arrival order
    from_username   TEXT NOT NULL,
    to_username     TEXT NOT NULL REFERENCES users(username),
    body            TEXT NOT NULL
);

CREATE INDEX idx_messages_to_username ON messages(to_username, id);
"#,
    // v3: friendship edges (directed, duplicates allowed)
    r#"
CREATE TABLE friendships (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,   -- insertion order
    owner_username  TEXT NOT NULL REFERENCES users(username),
    friend_username TEXT NOT NULL,
    created_at      TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_friendships_owner ON friendships(owner_username, id);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert_eq!(MIGRATIONS.len(), 3);
        assert!(MIGRATIONS.iter().all(|m| !m.trim().is_empty()));
    }

    #[test]
    fn test_username_is_unique() {
        let users = MIGRATIONS[0];
        assert!(users.contains("CREATE TABLE users"));
        assert!(users.contains("UNIQUE"));
    }
}
