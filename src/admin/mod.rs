//! Administration module for Postbox.
//!
//! The active flag is flipped only from here, by an operator running the
//! `postbox` binary. None of this is reachable over HTTP.

mod user;

pub use user::UserAdminService;
