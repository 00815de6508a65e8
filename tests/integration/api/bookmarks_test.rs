//! Bookmark API integration tests
//!
//! Ownership scoping across two users, plus the full sign-up to delete
//! walkthrough.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

async fn create(server: &axum_test::TestServer, token: &str, body: Value) -> Value {
    let response = server.post("/bookmarks").authorization_bearer(token).json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());
    response.json()
}

#[tokio::test]
async fn test_end_to_end_walkthrough() {
    let server = test_server().await;
    let credentials = json!({ "email": "a@b.com", "password": "pw123456" });

    let response = server.post("/auth/sign_up").json(&credentials).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server.post("/auth/sign_up").json(&credentials).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .post("/auth/sign_in")
        .json(&json!({ "email": "a@b.com", "password": "wrong-pass" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.post("/auth/sign_in").json(&credentials).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let token = response.json::<Value>()["access_token"].as_str().unwrap().to_string();

    let response = server
        .post("/bookmarks")
        .authorization_bearer(&token)
        .json(&json!({ "title": "g", "link": "https://g.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_i64().unwrap();

    let other_token = sign_up_user(&server, "other@b.com").await;
    let response = server
        .delete(&format!("/bookmarks/{id}"))
        .authorization_bearer(&other_token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .delete(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_create_bookmark_stamps_caller_as_owner() {
    let server = test_server().await;
    let token = sign_up_user(&server, "a@b.com").await;
    let other_token = sign_up_user(&server, "other@b.com").await;

    let body = create(
        &server,
        &token,
        json!({
            "title": "g",
            "link": "https://g.com",
            "userId": subject_of(&other_token),
            "user_id": subject_of(&other_token),
        }),
    )
    .await;

    assert_eq!(body["userId"], subject_of(&token));
    assert_eq!(body["title"], "g");
    assert_eq!(body["link"], "https://g.com");
    assert!(body["description"].is_null());
    assert!(body.get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_bookmark_validation() {
    let server = test_server().await;
    let token = sign_up_user(&server, "a@b.com").await;

    let cases = [
        json!({ "link": "https://g.com" }),
        json!({ "title": "g" }),
        json!({ "title": "", "link": "https://g.com" }),
        json!({ "title": "g", "link": "not a url" }),
        json!({ "title": "g", "link": "javascript:alert(1)" }),
    ];

    for body in cases {
        let response = server.post("/bookmarks").authorization_bearer(&token).json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn test_get_and_edit_bookmark() {
    let server = test_server().await;
    let token = sign_up_user(&server, "a@b.com").await;
    let created = create(&server, &token, json!({ "title": "g", "link": "https://g.com" })).await;
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/bookmarks/{id}")).authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), created);

    let response = server
        .patch(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "description": "search engine" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let edited: Value = response.json();
    assert_eq!(edited["title"], "g");
    assert_eq!(edited["description"], "search engine");

    let response = server
        .patch(&format!("/bookmarks/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "link": "nope" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_foreign_bookmark_is_not_found() {
    let server = test_server().await;
    let owner = sign_up_user(&server, "a@b.com").await;
    let stranger = sign_up_user(&server, "other@b.com").await;
    let created = create(&server, &owner, json!({ "title": "g", "link": "https://g.com" })).await;
    let path = format!("/bookmarks/{}", created["id"]);

    let get = server.get(&path).authorization_bearer(&stranger).await;
    let patch = server
        .patch(&path)
        .authorization_bearer(&stranger)
        .json(&json!({ "title": "mine now" }))
        .await;
    let delete = server.delete(&path).authorization_bearer(&stranger).await;
    let missing = server.get("/bookmarks/999999").authorization_bearer(&stranger).await;

    for response in [&get, &patch, &delete, &missing] {
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
    assert_eq!(get.text(), missing.text());

    let response = server.get(&path).authorization_bearer(&owner).await;
    assert_eq!(response.json::<Value>()["title"], "g");
}

#[tokio::test]
async fn test_list_is_scoped_and_capped() {
    let server = test_server().await;
    let owner = sign_up_user(&server, "a@b.com").await;
    let stranger = sign_up_user(&server, "other@b.com").await;

    for i in 0..12 {
        create(&server, &owner, json!({ "title": format!("b{i}"), "link": "https://g.com" })).await;
    }
    create(&server, &stranger, json!({ "title": "theirs", "link": "https://t.com" })).await;

    let listed: Vec<Value> = server.get("/bookmarks").authorization_bearer(&owner).await.json();
    assert_eq!(listed.len(), 10);
    assert_eq!(listed[0]["title"], "b0");
    let owner_id = subject_of(&owner);
    assert!(listed.iter().all(|b| b["userId"] == owner_id));

    let theirs: Vec<Value> = server.get("/bookmarks").authorization_bearer(&stranger).await.json();
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0]["title"], "theirs");
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let server = test_server().await;
    let token = sign_up_user(&server, "a@b.com").await;

    let response = server.get("/bookmarks/abc").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["status"], 400);

    let response = server.delete("/bookmarks/abc").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bookmarks_require_token() {
    let server = test_server().await;

    assert_eq!(server.get("/bookmarks").await.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        server
            .post("/bookmarks")
            .json(&json!({ "title": "g", "link": "https://g.com" }))
            .await
            .status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(server.delete("/bookmarks/1").await.status_code(), StatusCode::UNAUTHORIZED);
}
