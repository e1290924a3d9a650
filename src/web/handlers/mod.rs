//! HTTP handlers.

pub mod account;
pub mod friend;
pub mod message;

pub use account::*;
pub use friend::*;
pub use message::*;

use std::sync::Arc;

use crate::facade::RequestFacade;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Operations behind every handler.
    pub facade: Arc<RequestFacade>,
}

impl AppState {
    pub fn new(facade: Arc<RequestFacade>) -> Self {
        Self { facade }
    }
}
