//! Web API Friend Tests
//!
//! Integration tests for save_friends and get_friends.

mod common;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};

use common::{
    create_active_user, create_test_server, create_test_server_with, signup, test_config,
};

async fn save(server: &TestServer, username: &str, password: &str, friend: &str) -> TestResponse {
    server
        .post("/save_friends")
        .json(&json!({
            "username": username,
            "password": password,
            "friend_username": friend
        }))
        .await
}

async fn list(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .get("/get_friends")
        .add_query_param("username", username)
        .add_query_param("password", password)
        .await
}

#[tokio::test]
async fn test_save_and_get_friends() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;

    let response = save(&server, "alice", "pw1", "bob").await;
    response.assert_status_ok();
    response.assert_json(&json!({"message": "friend username saved successfully"}));
    save(&server, "alice", "pw1", "carol")
        .await
        .assert_status_ok();
    save(&server, "alice", "pw1", "bob")
        .await
        .assert_status_ok();

    let response = list(&server, "alice", "pw1").await;
    response.assert_status_ok();
    response.assert_json(&json!(["bob", "carol", "bob"]));
}

#[tokio::test]
async fn test_friend_need_not_be_registered() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;

    save(&server, "alice", "pw1", "someone-else")
        .await
        .assert_status_ok();
    list(&server, "alice", "pw1")
        .await
        .assert_json(&json!(["someone-else"]));
}

#[tokio::test]
async fn test_no_friends_is_not_found() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;

    let response = list(&server, "alice", "pw1").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "No friends found");
}

#[tokio::test]
async fn test_no_friends_as_empty_list() {
    let mut config = test_config();
    config.friends.empty_list_is_error = false;
    let (server, facade) = create_test_server_with(config).await;
    create_active_user(&server, &facade, "alice", "pw1").await;

    let response = list(&server, "alice", "pw1").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_inactive_user_cannot_manage_friends() {
    let (server, _facade) = create_test_server().await;
    signup(&server, "alice", "pw1").await;

    let response = save(&server, "alice", "pw1", "bob").await;
    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "User is not active. Cannot save friend username."
    );

    let response = list(&server, "alice", "pw1").await;
    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "User is not active. Cannot retrieve friends."
    );
}

#[tokio::test]
async fn test_friends_wrong_password() {
    let (server, facade) = create_test_server().await;
    create_active_user(&server, &facade, "alice", "pw1").await;

    save(&server, "alice", "bad", "bob")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    list(&server, "alice", "bad")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_friends_missing_query() {
    let (server, _facade) = create_test_server().await;

    let response = server.get("/get_friends").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
