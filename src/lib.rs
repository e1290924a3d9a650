//! Postbox - credential-gated store-and-forward mailbox.
//!
//! Users sign up, wait for an operator to activate them, then leave messages
//! for each other and keep a list of friends. Every request carries the
//! caller's username and password; there are no sessions.

pub mod admin;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod facade;
pub mod friend;
pub mod logging;
pub mod mail;
pub mod retry;
pub mod web;

pub use admin::UserAdminService;
pub use auth::{
    CredentialGate, CredentialHasher, CredentialStore, PasswordError, RegistrationRequest,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{PostboxError, Result};
pub use facade::{LoginOutcome, RequestFacade};
pub use friend::{EmptyFriendsPolicy, FriendRegistry, Friendship};
pub use mail::{Mailbox, Message, NewMessage};
pub use retry::{with_retry, RetryPolicy};
pub use web::WebServer;
