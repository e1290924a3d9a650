//! Mail module for Postbox.
//!
//! This module provides the store-and-forward mailbox:
//! - Deposit of messages keyed by recipient
//! - Atomic consume (read + delete) of a whole mailbox

mod repository;
mod service;
mod types;

pub use repository::MessageRepository;
pub use service::Mailbox;
pub use types::{Message, NewMessage};
