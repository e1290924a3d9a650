//! Mailbox handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::{
    MessageResponse, ScanMessagesRequest, ScanResponse, SendMessageRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /send_message - Deposit a message in another user's mailbox.
#[utoipa::path(
    post,
    path = "/send_message",
    tag = "messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message sent", body = MessageResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Sender is not active"),
        (status = 404, description = "Recipient user not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .facade
        .send_message(&req.from_username, &req.password, &req.to_username, &req.message)
        .await
        .map_err(|e| ApiError::for_action(e, "send messages"))?;

    Ok(Json(MessageResponse::new("Message sent successfully")))
}

/// POST /scan_messages - Return and clear the caller's mailbox.
#[utoipa::path(
    post,
    path = "/scan_messages",
    tag = "messages",
    request_body = ScanMessagesRequest,
    responses(
        (status = 200, description = "Pending messages, oldest first", body = ScanResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "User is not active"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn scan_messages(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<ScanMessagesRequest>,
) -> Result<Json<ScanResponse>, ApiError> {
    let messages = state
        .facade
        .scan_messages(&req.username, &req.password)
        .await
        .map_err(|e| ApiError::for_action(e, "scan messages"))?;

    Ok(Json(messages.into()))
}
