//! Web API Message Tests
//!
//! Integration tests for send_message and scan_messages.

mod common;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};

use common::{create_active_user, create_test_server, signup};

async fn send(
    server: &TestServer,
    from: &str,
    password: &str,
    to: &str,
    message: &str,
) -> TestResponse {
    server
        .post("/send_message")
        .json(&json!({
            "from_username": from,
            "password": password,
            "to_username": to,
            "message": message
        }))
        .await
}

async fn scan(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/scan_messages")
        .json(&json!({"username": username, "password": password}))
        .await
}

#[tokio::test]
async fn test_send_and_scan() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;
    create_active_user(&server, &facade, "bob", "pw2").await;

    let response = send(&server, "alice", "pw1", "bob", "first").await;
    response.assert_status_ok();
    response.assert_json(&json!({"message": "Message sent successfully"}));
    send(&server, "alice", "pw1", "bob", "second")
        .await
        .assert_status_ok();

    let response = scan(&server, "bob", "pw2").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "messages": [
            {"from_username": "alice", "message": "first"},
            {"from_username": "alice", "message": "second"}
        ]
    }));

    let response = scan(&server, "bob", "pw2").await;
    response.assert_status_ok();
    response.assert_json(&json!({"messages": []}));
}

#[tokio::test]
async fn test_send_to_unknown_recipient() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;

    let response = send(&server, "alice", "pw1", "ghost", "hi").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Recipient user not found.");
}

#[tokio::test]
async fn test_send_from_inactive_user() {
    let (server, facade) = create_test_server().await;
    signup(&server, "alice", "pw1").await;
    create_active_user(&server, &facade, "bob", "pw2").await;

    let response = send(&server, "alice", "pw1", "bob", "hi").await;
    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "User is not active. Cannot send messages."
    );
}

#[tokio::test]
async fn test_send_to_inactive_recipient_is_allowed() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;
    signup(&server, "bob", "pw2").await;

    send(&server, "alice", "pw1", "bob", "waiting for you")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_look_the_same() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "bob", "pw2").await;

    let wrong_password = scan(&server, "bob", "nope").await;
    let unknown_user = scan(&server, "nobody", "pw2").await;

    wrong_password.assert_status(StatusCode::UNAUTHORIZED);
    unknown_user.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json::<Value>(), unknown_user.json::<Value>());
}

#[tokio::test]
async fn test_scan_inactive_user() {
    let (server, _facade) = create_test_server().await;
    signup(&server, "bob", "pw2").await;

    let response = scan(&server, "bob", "pw2").await;
    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "User is not active. Cannot scan messages."
    );
}

#[tokio::test]
async fn test_scan_only_returns_own_messages() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;
    create_active_user(&server, &facade, "bob", "pw2").await;
    create_active_user(&server, &facade, "carol", "pw3").await;

    send(&server, "alice", "pw1", "bob", "for bob")
        .await
        .assert_status_ok();
    send(&server, "alice", "pw1", "carol", "for carol")
        .await
        .assert_status_ok();

    scan(&server, "bob", "pw2").await.assert_json(&json!({
        "messages": [{"from_username": "alice", "message": "for bob"}]
    }));
    scan(&server, "carol", "pw3").await.assert_json(&json!({
        "messages": [{"from_username": "alice", "message": "for carol"}]
    }));
}

#[tokio::test]
async fn test_send_validation() {
    let (server, _facade) = create_test_server().await;

    let response = send(&server, "alice\n", "pw1", "bob", "hi").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["error"]["details"]["from_username"].is_array());
}

#[tokio::test]
async fn test_overlong_password_is_unauthenticated() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;
    create_active_user(&server, &facade, "bob", "pw2").await;
    let long = "x".repeat(200);

    let response = scan(&server, "bob", &long).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    send(&server, "alice", &long, "bob", "hi")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    send(&server, "alice", "", "bob", "hi")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
