//! Data Transfer Objects for the HTTP boundary.

pub mod request;
pub mod response;
pub mod validation;

pub use request::*;
pub use response::*;
pub use validation::{ValidatedJson, ValidatedQuery};
