mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({ "username": "sue", "password": "1234" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "sue");
    assert!(body["id"].is_string());
    // The digest must never be echoed back
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register("sue", "1234").await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({ "username": "sue", "password": "other_password" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Username taken");
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::spawn().await;

    // Three characters is one too few
    let response = app
        .post("/api/auth/register")
        .json(&json!({ "username": "sue", "password": "123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Password length must be longer than 3 chars");

    // The rejected attempt must not have created a record: registering
    // the same username with a valid password still succeeds.
    app.register("sue", "1234").await;
}

#[tokio::test]
async fn test_register_missing_password() {
    let app = TestApp::spawn().await;

    // An absent password is handled by the length guard, not the JSON
    // extractor: same halt body as a too-short password
    let response = app
        .post("/api/auth/register")
        .json(&json!({ "username": "sue" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Password length must be longer than 3 chars");

    // A null password gets the same treatment
    let response = app
        .post("/api/auth/register")
        .json(&json!({ "username": "sue", "password": null }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Password length must be longer than 3 chars");

    app.register("sue", "1234").await;
}

#[tokio::test]
async fn test_register_checks_username_before_password() {
    let app = TestApp::spawn().await;
    app.register("sue", "1234").await;

    // Both guards would halt; the username guard runs first
    let response = app
        .post("/api/auth/register")
        .json(&json!({ "username": "sue", "password": "12" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Username taken");
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::spawn().await;
    app.register("sue", "1234").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "username": "sue", "password": "1234" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Welcome sue!");

    // The session now authenticates restricted routes
    let response = app
        .get("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("sue", "1234").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "username": "sue", "password": "4321" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid credentials");

    // No session was established
    let response = app
        .get("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "username": "ghost", "password": "1234" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Indistinguishable from a wrong password
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_logout_without_session() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "You shall not pass!");
}

#[tokio::test]
async fn test_logout_destroys_session() {
    let app = TestApp::spawn().await;
    app.register("sue", "1234").await;
    app.login("sue", "1234").await;

    let response = app
        .get("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "logged out");

    // Same client, destroyed session: restricted routes reject again
    let response = app
        .get("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "You shall not pass!");
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let app = TestApp::spawn().await;
    app.register("sue", "1234").await;
    app.login("sue", "1234").await;

    // A second client against the same server has no session
    let other_client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create reqwest client");

    let response = other_client
        .get(format!("{}/api/auth/logout", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_empty_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({ "username": "", "password": "1234" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
