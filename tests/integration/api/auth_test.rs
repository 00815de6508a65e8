//! Authentication API integration tests
//!
//! Sign-up, sign-in, and the bearer-token guard.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

#[tokio::test]
async fn test_sign_up_success() {
    let server = test_server().await;

    let response = server
        .post("/auth/sign_up")
        .json(&json!({ "email": "a@b.com", "password": "pw123456" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_sign_up_duplicate_email_is_forbidden() {
    let server = test_server().await;
    sign_up_user(&server, "a@b.com").await;

    let response = server
        .post("/auth/sign_up")
        .json(&json!({ "email": "a@b.com", "password": "pw123456" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["status"], 403);
}

#[tokio::test]
async fn test_sign_up_rejects_malformed_input() {
    let server = test_server().await;

    let cases = [
        json!({ "email": "misha@asd", "password": "test_test" }),
        json!({ "email": "", "password": "test_test" }),
        json!({ "email": "misha@asd.asd", "password": "" }),
        json!({ "email": "misha@asd.asd" }),
        json!({ "password": "test_test" }),
        json!({}),
    ];

    for body in cases {
        let response = server.post("/auth/sign_up").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{body}");
        let error: Value = response.json();
        assert_eq!(error["status"], 400);
    }
}

#[tokio::test]
async fn test_sign_up_rejects_non_json_body() {
    let server = test_server().await;

    let response = server.post("/auth/sign_up").text("not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn test_sign_in_success_returns_token_for_same_user() {
    let server = test_server().await;
    let sign_up_token = sign_up_user(&server, "a@b.com").await;

    let response = server
        .post("/auth/sign_in")
        .json(&json!({ "email": "a@b.com", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let token = body["access_token"].as_str().unwrap();
    assert_eq!(subject_of(token), subject_of(&sign_up_token));
}

#[tokio::test]
async fn test_sign_in_failures_are_indistinguishable() {
    let server = test_server().await;
    sign_up_user(&server, "a@b.com").await;

    let wrong_password = server
        .post("/auth/sign_in")
        .json(&json!({ "email": "a@b.com", "password": "wrong-password" }))
        .await;
    let unknown_email = server
        .post("/auth/sign_in")
        .json(&json!({ "email": "nobody@b.com", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.text(), unknown_email.text());
}

#[tokio::test]
async fn test_short_wrong_password_matches_unknown_email() {
    let server = test_server().await;
    sign_up_user(&server, "a@b.com").await;

    let short_password = server
        .post("/auth/sign_in")
        .json(&json!({ "email": "a@b.com", "password": "abc" }))
        .await;
    let unknown_email = server
        .post("/auth/sign_in")
        .json(&json!({ "email": "nobody@b.com", "password": "abc" }))
        .await;

    assert_eq!(short_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(short_password.text(), unknown_email.text());
    let body: Value = short_password.json();
    assert_eq!(body["error"], "Credentials error");
}

#[tokio::test]
async fn test_sign_in_is_case_sensitive_on_email() {
    let server = test_server().await;
    sign_up_user(&server, "a@b.com").await;

    let response = server
        .post("/auth/sign_in")
        .json(&json!({ "email": "A@b.com", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let server = test_server().await;

    let response = server.get("/users/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn test_protected_route_rejects_bad_tokens() {
    let server = test_server().await;
    let token = sign_up_user(&server, "a@b.com").await;
    let user_id = subject_of(&token);

    let bad_headers = [
        format!("Basic {token}"),
        token.clone(),
        "Bearer not.a.token".to_string(),
        format!("Bearer {}", expired_token(user_id, "a@b.com")),
        format!("Bearer {}x", token),
    ];

    for header in bad_headers {
        let response = server
            .get("/bookmarks")
            .add_header(AUTHORIZATION, HeaderValue::from_str(&header).unwrap())
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{header}");
    }
}

#[tokio::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let server = test_server().await;
    let token = sign_up_user(&server, "a@b.com").await;

    let response = server
        .get("/users/me")
        .add_header(AUTHORIZATION, HeaderValue::from_str(&format!("bearer {token}")).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let server = test_server().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = test_server().await;

    let response = server.get("/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], 404);
}
