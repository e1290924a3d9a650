//! Router configuration for the HTTP boundary.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::{
    DeliveredMessage, LoginRequest, LoginResponse, MessageResponse, SaveFriendRequest,
    ScanMessagesRequest, ScanResponse, SendMessageRequest, SignupRequest,
};
use super::handlers::{
    self, get_friends, login, root, save_friends, scan_messages, send_message, signup, AppState,
};
use super::middleware::{create_cors_layer, credential_rate_limit, RateLimitState};

/// OpenAPI document for the HTTP boundary.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Postbox API",
        description = "Credential-gated store-and-forward mailbox"
    ),
    paths(
        handlers::account::root,
        handlers::account::signup,
        handlers::account::login,
        handlers::message::send_message,
        handlers::message::scan_messages,
        handlers::friend::save_friends,
        handlers::friend::get_friends,
    ),
    components(schemas(
        SignupRequest,
        LoginRequest,
        SendMessageRequest,
        ScanMessagesRequest,
        SaveFriendRequest,
        MessageResponse,
        LoginResponse,
        ScanResponse,
        DeliveredMessage,
    )),
    tags(
        (name = "account", description = "Signup and login"),
        (name = "messages", description = "Store-and-forward mailbox"),
        (name = "friends", description = "Per-user friend lists")
    )
)]
pub struct ApiDoc;

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    rate_limit: Arc<RateLimitState>,
    cors_origins: &[String],
) -> Router {
    // Every one of these runs a password check
    let credential_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/send_message", post(send_message))
        .route("/scan_messages", post(scan_messages))
        .route("/save_friends", post(save_friends))
        .route("/get_friends", get(get_friends))
        .route_layer(middleware::from_fn(move |req, next| {
            credential_rate_limit(rate_limit.clone(), req, next)
        }));

    Router::new()
        .route("/", get(root))
        .merge(credential_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
