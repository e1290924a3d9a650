//! Friend registry module for Postbox.
//!
//! Directed, non-deduplicated friendship edges per user.

mod repository;
mod service;
mod types;

pub use repository::FriendRepository;
pub use service::FriendRegistry;
pub use types::{EmptyFriendsPolicy, Friendship};
