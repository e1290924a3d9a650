//! Account handlers: service banner, signup and login.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::{LoginRequest, LoginResponse, MessageResponse, SignupRequest, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET / - Service banner.
#[utoipa::path(
    get,
    path = "/",
    tag = "account",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Messaging App API is running"))
}

/// POST /signup - Register a new account. The account starts inactive.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "account",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered, activation pending", body = MessageResponse),
        (status = 400, description = "Username already exists"),
        (status = 422, description = "Validation error"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = state
        .facade
        .signup(&req.username, &req.email, &req.password)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "User '{}' registered successfully. Activation pending.",
        user.username
    ))))
}

/// POST /login - Check credentials.
///
/// Bad credentials and inactive accounts are reported in the body with 200.
#[utoipa::path(
    post,
    path = "/login",
    tag = "account",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login outcome", body = LoginResponse),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = state.facade.login(&req.username, &req.password).await?;
    Ok(Json(outcome.into()))
}
