//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use postbox::config::{Config, SecurityConfig, ServerConfig};
use postbox::web::{create_health_router, create_router, AppState};
use postbox::web::middleware::RateLimitState;
use postbox::{Database, RequestFacade, UserAdminService};

/// Config with cheap password hashing and a generous rate limit.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            credential_rate_limit: 10_000,
            ..Default::default()
        },
        security: SecurityConfig {
            argon2_memory_kib: 1024,
            argon2_iterations: 1,
            argon2_parallelism: 1,
        },
        ..Default::default()
    }
}

/// Build a facade over a fresh in-memory database.
pub async fn create_facade(config: &Config) -> Arc<RequestFacade> {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    Arc::new(RequestFacade::new(config, db).expect("Failed to create facade"))
}

/// Create a test server with the given config.
pub async fn create_test_server_with(config: Config) -> (TestServer, Arc<RequestFacade>) {
    let facade = create_facade(&config).await;

    let router = create_router(
        Arc::new(AppState::new(facade.clone())),
        Arc::new(RateLimitState::new(
            config.server.credential_rate_limit,
            config.server.trust_proxy_headers,
        )),
        &config.server.cors_origins,
    )
    .merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");
    (server, facade)
}

/// Create a test server with [`test_config`].
pub async fn create_test_server() -> (TestServer, Arc<RequestFacade>) {
    create_test_server_with(test_config()).await
}

/// Sign up through the HTTP API.
pub async fn signup(server: &TestServer, username: &str, password: &str) -> Value {
    server
        .post("/signup")
        .json(&json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": password
        }))
        .await
        .json::<Value>()
}

/// Activate a user out of band, as an operator would.
pub async fn activate(facade: &RequestFacade, username: &str) {
    UserAdminService::new(facade.db())
        .activate(username)
        .await
        .expect("Failed to activate user");
}

/// Sign up and activate a user.
pub async fn create_active_user(
    server: &TestServer,
    facade: &RequestFacade,
    username: &str,
    password: &str,
) {
    signup(server, username, password).await;
    activate(facade, username).await;
}
