//! Profile API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

#[tokio::test]
async fn test_get_me() {
    let server = test_server().await;
    let token = sign_up_user(&server, "misha@asd.asd").await;

    let response = server.get("/users/me").authorization_bearer(&token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["email"], "misha@asd.asd");
    assert_eq!(body["id"], subject_of(&token));
    assert!(body["firstName"].is_null());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
    assert!(body.get("createdAt").is_some());
}

#[tokio::test]
async fn test_edit_user() {
    let server = test_server().await;
    let token = sign_up_user(&server, "misha@asd.asd").await;

    let response = server
        .patch("/users")
        .authorization_bearer(&token)
        .json(&json!({ "firstName": "Mish", "email": "misha@asd.asd" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["firstName"], "Mish");

    let response = server
        .patch("/users")
        .authorization_bearer(&token)
        .json(&json!({ "lastName": "nonnono" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = server.get("/users/me").authorization_bearer(&token).await.json();
    assert_eq!(body["firstName"], "Mish");
    assert_eq!(body["lastName"], "nonnono");
    assert_eq!(body["email"], "misha@asd.asd");
}

#[tokio::test]
async fn test_edit_user_rejects_email_changes() {
    let server = test_server().await;
    let token = sign_up_user(&server, "misha@asd.asd").await;

    for email in ["", "misha@asd", "other@asd.asd"] {
        let response = server
            .patch("/users")
            .authorization_bearer(&token)
            .json(&json!({ "email": email }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{email:?}");
    }

    let body: Value = server.get("/users/me").authorization_bearer(&token).await.json();
    assert_eq!(body["email"], "misha@asd.asd");
}

#[tokio::test]
async fn test_edit_user_requires_token() {
    let server = test_server().await;

    let response = server.patch("/users").json(&json!({ "firstName": "Mish" })).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
