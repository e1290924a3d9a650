//! Request DTOs for the HTTP boundary.
//!
//! Every request carries raw credentials; there are no sessions.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::validation::single_line;

/// Signup request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "single_line")
    )]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Login request.
///
/// Not validated: malformed credentials are reported like wrong ones.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Send message request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    /// Sender; must match the password.
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "single_line")
    )]
    pub from_username: String,
    /// Checked by the credential gate only.
    pub password: String,
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "single_line")
    )]
    pub to_username: String,
    /// Message body, unrestricted.
    pub message: String,
}

/// Scan messages request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ScanMessagesRequest {
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "single_line")
    )]
    pub username: String,
    /// Checked by the credential gate only.
    pub password: String,
}

/// Save friend request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveFriendRequest {
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "single_line")
    )]
    pub username: String,
    /// Checked by the credential gate only.
    pub password: String,
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "single_line")
    )]
    pub friend_username: String,
}

/// Get friends query string.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetFriendsQuery {
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        custom(function = "single_line")
    )]
    pub username: String,
    /// Checked by the credential gate only.
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        let ok = SignupRequest {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "pw1".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = SignupRequest {
            username: "".into(),
            email: "not-an-email".into(),
            password: "".into(),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_username_rejects_control_chars() {
        let req = ScanMessagesRequest {
            username: "bob\tby".into(),
            password: "pw".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_long_username_rejected() {
        let req = SaveFriendRequest {
            username: "a".repeat(65),
            password: "pw".into(),
            friend_username: "bob".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_message_body_unrestricted() {
        let req = SendMessageRequest {
            from_username: "alice".into(),
            password: "pw1".into(),
            to_username: "bob".into(),
            message: "x".repeat(100_000),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_credential_password_left_to_gate() {
        let long = "p".repeat(200);
        let scan = ScanMessagesRequest {
            username: "alice".into(),
            password: long.clone(),
        };
        assert!(scan.validate().is_ok());

        let query = GetFriendsQuery {
            username: "alice".into(),
            password: String::new(),
        };
        assert!(query.validate().is_ok());

        let signup = SignupRequest {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: long,
        };
        assert!(signup.validate().is_err());
    }
}
