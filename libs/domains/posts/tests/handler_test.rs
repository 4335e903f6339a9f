//! Handler tests for the Posts domain
//!
//! These drive the posts router with `oneshot` against in-memory
//! repositories. The users router shares the same user store so a full
//! signup then post flow can be checked end to end.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_helpers::auth::{JwtConfig, TokenManager};
use domain_posts::*;
use domain_users::{InMemoryUserRepository, UserRepository, UserService};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

struct TestApp {
    users: Router,
    posts: Router,
    user_store: InMemoryUserRepository,
}

fn app() -> TestApp {
    let user_store = InMemoryUserRepository::new();
    let tokens = TokenManager::new(&JwtConfig::new(
        "posts-handler-secret-with-at-least-32-chars",
    ));

    let users = domain_users::handlers::router(UserService::new(user_store.clone(), tokens));
    let posts = handlers::router(PostService::new(
        InMemoryPostRepository::new(),
        user_store.clone(),
    ));

    TestApp {
        users,
        posts,
        user_store,
    }
}

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> axum::response::Response {
    router.clone().oneshot(request).await.unwrap()
}

async fn signup_ana(app: &TestApp) -> Uuid {
    let response = send(
        &app.users,
        json_request(
            "POST",
            "/signup",
            json!({"name": "Ana", "email": "ana@x.com", "password": "abc"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    app.user_store
        .get_by_email("ana@x.com")
        .await
        .unwrap()
        .unwrap()
        .id
}

async fn create_post(app: &TestApp, creator_id: Uuid, content: &str) -> Value {
    let response = send(
        &app.posts,
        json_request(
            "POST",
            "/",
            json!({"creator_Id": creator_id, "content": content}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response.into_body()).await
}

#[tokio::test]
async fn test_signup_then_post_flow() {
    let app = app();
    let ana = signup_ana(&app).await;

    let body = create_post(&app, ana, "hi").await;

    assert_eq!(body["message"], "Post created successfully");
    let post = &body["newPostWithUserName"];
    assert_eq!(post["name"], "Ana");
    assert_eq!(post["creator_Id"], ana.to_string());
    assert_eq!(post["content"], "hi");
    assert_eq!(post["likes"], 0);
    assert_eq!(post["dislikes"], 0);
    assert!(post["created_at"].is_string());
}

#[tokio::test]
async fn test_post_with_unknown_creator_has_null_name() {
    let app = app();

    let body = create_post(&app, Uuid::now_v7(), "orphan").await;

    assert!(body["newPostWithUserName"]["name"].is_null());
    assert!(body["newPostWithUserName"]["created_at"].is_null());
}

#[tokio::test]
async fn test_create_post_validation() {
    let app = app();

    let response = send(
        &app.posts,
        json_request(
            "POST",
            "/",
            json!({"creator_Id": Uuid::now_v7(), "content": ""}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "'content' must not be empty"
    );

    let response = send(
        &app.posts,
        json_request("POST", "/", json!({"creator_Id": "not-a-uuid", "content": "x"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_post_returns_201() {
    let app = app();
    let ana = signup_ana(&app).await;
    let id = create_post(&app, ana, "hi").await["newPostWithUserName"]["id"].clone();

    let response = send(
        &app.posts,
        json_request(
            "PUT",
            "/",
            json!({"id": id, "content": "edited", "likes": 4, "unknown": true}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response.into_body()).await["message"],
        "Post updated successfully"
    );

    let response = send(
        &app.posts,
        json_request("GET", "/", json!({"id": id})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["message"], "Post found");
    assert_eq!(body["post"]["content"], "edited");
    assert_eq!(body["post"]["likes"], 4);
    assert_eq!(body["post"]["dislikes"], 0);
}

#[tokio::test]
async fn test_edit_missing_post_returns_404() {
    let app = app();

    let response = send(
        &app.posts,
        json_request("PUT", "/", json!({"id": Uuid::now_v7(), "content": "x"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let app = app();
    let ana = signup_ana(&app).await;
    let id = create_post(&app, ana, "hi").await["newPostWithUserName"]["id"].clone();

    let response = send(&app.posts, json_request("DELETE", "/", json!({"id": id}))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response.into_body()).await["message"],
        "Post deleted successfully"
    );

    let response = send(&app.posts, json_request("DELETE", "/", json!({"id": id}))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app.posts, json_request("GET", "/", json!({"id": id}))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_posts_by_creator_and_all() {
    let app = app();
    let ana = signup_ana(&app).await;
    create_post(&app, ana, "one").await;
    create_post(&app, ana, "two").await;
    create_post(&app, Uuid::now_v7(), "three").await;

    let response = send(
        &app.posts,
        json_request("GET", "/", json!({"creatorId": ana})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);

    let uri = format!("/?creatorId={}", ana);
    let response = send(
        &app.posts,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);

    let response = send(
        &app.posts,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_posts_empty_store_returns_404() {
    let app = app();

    let response = send(
        &app.posts,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_posts_malformed_body_returns_400() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::from("{\"id\": "))
        .unwrap();
    let response = send(&app.posts, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let app = app();

    let request = Request::builder()
        .method("PATCH")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = send(&app.posts, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_non_uuid_post_id_is_rejected_as_invalid() {
    let app = app();

    let response = send(&app.posts, json_request("DELETE", "/", json!({"id": "abc"}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app.posts, json_request("GET", "/", json!({"id": "abc"}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
