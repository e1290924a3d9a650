//! Authentication module for Postbox.
//!
//! This module provides password hashing, the credential store (signup and
//! lookup) and the credential gate that guards every mutating operation.

mod gate;
mod password;
mod registration;

pub use gate::CredentialGate;
pub use password::{CredentialHasher, PasswordError};
pub use registration::{CredentialStore, RegistrationRequest};
