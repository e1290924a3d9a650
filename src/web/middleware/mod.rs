//! Middleware for the HTTP boundary.

pub mod cors;
pub mod rate_limit;

pub use cors::create_cors_layer;
pub use rate_limit::{credential_rate_limit, RateLimitState};
