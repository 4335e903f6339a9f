//! Handler tests for the Users domain
//!
//! These drive the users router directly with `oneshot`:
//! - request validation and the plain-text error bodies
//! - status codes per endpoint
//! - response shapes
//!
//! They run against the in-memory repository; see `integration_test.rs` for
//! PostgreSQL.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_helpers::auth::{JwtConfig, TokenManager};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

const SECRET: &str = "handler-test-secret-with-at-least-32-chars";

fn tokens() -> TokenManager {
    TokenManager::new(&JwtConfig::new(SECRET))
}

fn app() -> (Router, InMemoryUserRepository) {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo.clone(), tokens());
    (handlers::router(service), repo)
}

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn signup(app: &Router, name: &str, email: &str, password: &str) -> axum::response::Response {
    app.clone()
        .oneshot(post_json(
            "/signup",
            json!({"name": name, "email": email, "password": password}),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_signup_returns_200_with_token() {
    let (app, _) = app();

    let response = signup(&app, "Ana", "ana@x.com", "abc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "User registered successfully");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_email_returns_409() {
    let (app, _) = app();

    signup(&app, "Ana", "ana@x.com", "abc").await;
    let response = signup(&app, "Someone Else", "ana@x.com", "xyz").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_text(response.into_body()).await, "User already registered");
}

#[tokio::test]
async fn test_signup_validation_returns_first_issue() {
    let (app, _) = app();

    let response = signup(&app, "An", "ana@x.com", "abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "'name' must have at least 3 characters"
    );

    let response = signup(&app, "Ana", "not-an-email", "abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "'email' must be a valid email address"
    );
}

#[tokio::test]
async fn test_signup_reports_earliest_declared_field() {
    let (app, _) = app();

    // Both name and email are invalid; name is declared first.
    let response = signup(&app, "A", "bad", "abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "'name' must have at least 3 characters"
    );
}

#[tokio::test]
async fn test_signup_name_padding_counts_and_is_kept() {
    let (app, repo) = app();

    let response = signup(&app, "  A  ", "ana@x.com", "abc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let stored = repo.get_by_email("ana@x.com").await.unwrap().unwrap();
    assert_eq!(stored.name, "  A  ");
    assert!(stored.name.chars().count() >= 3);
}

#[tokio::test]
async fn test_signup_rejects_unknown_role() {
    let (app, _) = app();

    let response = app
        .oneshot(post_json(
            "/signup",
            json!({"name": "Ana", "email": "ana@x.com", "password": "abc", "role": "root"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_malformed_json_returns_400() {
    let (app, _) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_flow() {
    let (app, _) = app();
    signup(&app, "Ana", "ana@x.com", "abc").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({"email": "ana@x.com", "password": "abc"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["role"], "normal");
    assert!(!body["token"].as_str().unwrap().is_empty());

    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            json!({"email": "ana@x.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_json(
            "/login",
            json!({"email": "nobody@x.com", "password": "abc"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_all_users_authorization() {
    let (app, repo) = app();

    let response = signup(&app, "Ana", "ana@x.com", "abc").await;
    let normal_token = body_json(response.into_body()).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    // No header at all
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "invalid token");

    // Non-admin token
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::AUTHORIZATION, &normal_token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "only admins can access this resource"
    );

    // Admin token
    let admin = User::new(
        Uuid::now_v7(),
        "Root".to_string(),
        "root@x.com".to_string(),
        HashManager::new().hash("root").await.unwrap(),
        Role::Admin,
    );
    repo.create(admin.clone()).await.unwrap();
    let admin_token = tokens()
        .create_token(&axum_helpers::TokenPayload::new(
            admin.id.to_string(),
            admin.name.clone(),
            "admin",
        ))
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::AUTHORIZATION, format!("Bearer {}", admin_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let users = body_json(response.into_body()).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_search_users() {
    let (app, _) = app();
    signup(&app, "Ana Maria", "ana@x.com", "abc").await;
    signup(&app, "Bob", "bob@x.com", "abc").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/search?q=maria")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Ana Maria");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/search?q=zed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
