//! HTTP API integration tests
//!
//! Each test spins up the full router against a fresh in-memory store and
//! drives it over HTTP with `axum_test::TestServer`.

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use askboard::server::init::create_app;
use askboard::store::Store;

async fn test_server() -> TestServer {
    let store = Store::in_memory().await.expect("in-memory store");
    TestServer::new(create_app(store)).expect("test server")
}

async fn create_question(server: &TestServer, title: &str, description: &str) -> String {
    let response = server
        .post("/questions")
        .json(&json!({ "title": title, "description": description }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["question"]["id"]
        .as_str()
        .expect("question id")
        .to_string()
}

// --- signup / login ---

#[tokio::test]
async fn test_signup_success() {
    let server = test_server().await;

    let response = server
        .post("/signup")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["message"].is_string());
    // No password field in the signup confirmation
    assert!(body.get("password").is_none());
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn test_signup_missing_field() {
    let server = test_server().await;

    let response = server
        .post("/signup")
        .json(&json!({
            "firstName": "Ada",
            "email": "ada@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "lastName is required");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = test_server().await;
    let user = json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "password": "password123"
    });

    let first = server.post("/signup").json(&user).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server.post("/signup").json(&user).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = second.json();
    assert_eq!(body["message"], "email is already registered");
}

#[tokio::test]
async fn test_login_success_returns_stored_user() {
    let server = test_server().await;
    server
        .post("/signup")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "password123"
        }))
        .await;

    let response = server
        .post("/login")
        .json(&json!({ "email": "ada@example.com", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["firstName"], "Ada");
    // The stored record comes back as-is: hashed digest, not the plaintext.
    let stored = body["user"]["password"].as_str().expect("digest");
    assert_ne!(stored, "password123");
    assert!(stored.starts_with("$2"));
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let server = test_server().await;
    server
        .post("/signup")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "password123"
        }))
        .await;

    let unknown_email = server
        .post("/login")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;
    let wrong_password = server
        .post("/login")
        .json(&json!({ "email": "ada@example.com", "password": "wrong" }))
        .await;

    assert_eq!(unknown_email.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);

    let a: Value = unknown_email.json();
    let b: Value = wrong_password.json();
    assert_eq!(a["message"], b["message"]);
    assert_eq!(a["message"], "invalid email or password");
}

// --- questions ---

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let server = test_server().await;
    create_question(&server, "T", "D").await;

    let response = server.get("/questions").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let questions: Vec<Value> = response.json();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["title"], "T");
    assert_eq!(questions[0]["description"], "D");
    assert_eq!(questions[0]["resolved"], false);
    assert_eq!(questions[0]["upvotes"], 0);
}

#[tokio::test]
async fn test_list_empty() {
    let server = test_server().await;
    let response = server.get("/questions").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let questions: Vec<Value> = response.json();
    assert!(questions.is_empty());
}

#[tokio::test]
async fn test_create_question_missing_title() {
    let server = test_server().await;

    let response = server
        .post("/questions")
        .json(&json!({ "description": "D" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "title is required");
}

#[tokio::test]
async fn test_update_resolved_leaves_upvotes() {
    let server = test_server().await;
    let id = create_question(&server, "T", "D").await;

    server
        .patch(&format!("/questions/{id}"))
        .json(&json!({ "upvotes": 7 }))
        .await;

    let response = server
        .patch(&format!("/questions/{id}"))
        .json(&json!({ "resolved": true }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["question"]["resolved"], true);
    assert_eq!(body["question"]["upvotes"], 7);
}

#[tokio::test]
async fn test_update_accepts_negative_upvotes() {
    let server = test_server().await;
    let id = create_question(&server, "T", "D").await;

    let response = server
        .patch(&format!("/questions/{id}"))
        .json(&json!({ "upvotes": -3 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["question"]["upvotes"], -3);
}

#[tokio::test]
async fn test_update_unknown_question() {
    let server = test_server().await;

    let response = server
        .patch("/questions/no-such-id")
        .json(&json!({ "resolved": true }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "question not found");
}

#[tokio::test]
async fn test_delete_then_update_and_delete_again() {
    let server = test_server().await;
    let id = create_question(&server, "T", "D").await;

    let deleted = server.delete(&format!("/questions/{id}")).await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let update = server
        .patch(&format!("/questions/{id}"))
        .json(&json!({ "resolved": true }))
        .await;
    assert_eq!(update.status_code(), StatusCode::NOT_FOUND);

    let again = server.delete(&format!("/questions/{id}")).await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}

// --- replies ---

#[tokio::test]
async fn test_add_and_list_replies() {
    let server = test_server().await;
    let id = create_question(&server, "T", "D").await;

    let created = server
        .post(&format!("/questions/{id}/replies"))
        .json(&json!({ "content": "hi" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let body: Value = created.json();
    assert_eq!(body["reply"]["content"], "hi");
    assert_eq!(body["reply"]["questionId"], id.as_str());

    let listed = server.get(&format!("/questions/{id}/replies")).await;
    assert_eq!(listed.status_code(), StatusCode::OK);
    let replies: Vec<Value> = listed.json();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["content"], "hi");
}

#[tokio::test]
async fn test_add_reply_to_unknown_question() {
    let server = test_server().await;

    let response = server
        .post("/questions/no-such-id/replies")
        .json(&json!({ "content": "hi" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_reply_empty_content() {
    let server = test_server().await;
    let id = create_question(&server, "T", "D").await;

    let response = server
        .post(&format!("/questions/{id}/replies"))
        .json(&json!({ "content": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "content is required");
}

#[tokio::test]
async fn test_list_replies_for_unknown_question_is_empty() {
    let server = test_server().await;

    let response = server.get("/questions/no-such-id/replies").await;

    // Asymmetric with add_reply on purpose: listing never 404s.
    assert_eq!(response.status_code(), StatusCode::OK);
    let replies: Vec<Value> = response.json();
    assert!(replies.is_empty());
}

#[tokio::test]
async fn test_replies_survive_question_delete() {
    let server = test_server().await;
    let id = create_question(&server, "T", "D").await;

    server
        .post(&format!("/questions/{id}/replies"))
        .json(&json!({ "content": "orphan-to-be" }))
        .await;
    server.delete(&format!("/questions/{id}")).await;

    // No cascade: the reply keeps its dangling reference.
    let listed = server.get(&format!("/questions/{id}/replies")).await;
    assert_eq!(listed.status_code(), StatusCode::OK);
    let replies: Vec<Value> = listed.json();
    assert_eq!(replies.len(), 1);
}

// --- pages ---

#[tokio::test]
async fn test_page_stubs_render() {
    let server = test_server().await;

    for path in ["/", "/ask", "/signup", "/login"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.text().contains("<html>"), "no html at {path}");
    }
}

#[tokio::test]
async fn test_unknown_route_404() {
    let server = test_server().await;
    let response = server.get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
