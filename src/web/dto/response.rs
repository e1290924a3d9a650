//! Response DTOs for the HTTP boundary.

use serde::Serialize;
use utoipa::ToSchema;

use crate::facade::LoginOutcome;
use crate::mail::Message;

/// Plain confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login outcome. Always returned with 200.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub detail: String,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            success: outcome.success,
            detail: outcome.detail.to_string(),
        }
    }
}

/// One delivered message.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveredMessage {
    pub from_username: String,
    pub message: String,
}

impl From<Message> for DeliveredMessage {
    fn from(m: Message) -> Self {
        Self {
            from_username: m.from_username,
            message: m.body,
        }
    }
}

/// Result of scanning a mailbox, in arrival order.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScanResponse {
    pub messages: Vec<DeliveredMessage>,
}

impl From<Vec<Message>> for ScanResponse {
    fn from(messages: Vec<Message>) -> Self {
        Self {
            messages: messages.into_iter().map(DeliveredMessage::from).collect(),
        }
    }
}
