//! Friend list handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::{
    GetFriendsQuery, MessageResponse, SaveFriendRequest, ValidatedJson, ValidatedQuery,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /save_friends - Append a name to the caller's friend list.
#[utoipa::path(
    post,
    path = "/save_friends",
    tag = "friends",
    request_body = SaveFriendRequest,
    responses(
        (status = 200, description = "Friend saved", body = MessageResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "User is not active"),
        (status = 404, description = "User not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn save_friends(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SaveFriendRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .facade
        .save_friend(&req.username, &req.password, &req.friend_username)
        .await
        .map_err(|e| ApiError::for_action(e, "save friend username"))?;

    Ok(Json(MessageResponse::new("friend username saved successfully")))
}

/// GET /get_friends - List the caller's friends in insertion order.
#[utoipa::path(
    get,
    path = "/get_friends",
    tag = "friends",
    params(GetFriendsQuery),
    responses(
        (status = 200, description = "Friend usernames", body = Vec<String>),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "User is not active"),
        (status = 404, description = "No friends found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_friends(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<GetFriendsQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let friends = state
        .facade
        .get_friends(&query.username, &query.password)
        .await
        .map_err(|e| ApiError::for_action(e, "retrieve friends"))?;

    Ok(Json(friends))
}
