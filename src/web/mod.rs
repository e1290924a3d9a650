//! HTTP boundary for Postbox.
//!
//! Translates JSON requests into [`RequestFacade`](crate::facade::RequestFacade)
//! calls and domain errors into HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::{create_health_router, create_router, create_swagger_router, ApiDoc};
pub use server::WebServer;
