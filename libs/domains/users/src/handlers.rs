use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use axum_helpers::{AuthorizationToken, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{
    LoginRequest, LoginResponse, Role, SearchQuery, SignupRequest, SignupResponse, UserResponse,
};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(signup, login, get_all_users, search_users),
    components(schemas(
        SignupRequest,
        SignupResponse,
        LoginRequest,
        LoginResponse,
        UserResponse,
        Role
    )),
    tags((name = TAG, description = "Registration, login and user lookup"))
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_all_users))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/search", get(search_users))
        .with_state(shared_service)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/signup",
    tag = TAG,
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered", body = SignupResponse),
        (status = 400, description = "Invalid input", body = String),
        (status = 409, description = "Email already registered", body = String),
        (status = 500, description = "Unexpected error", body = String)
    )
)]
async fn signup<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<SignupRequest>,
) -> UserResult<Json<SignupResponse>> {
    let output = service.create_user(input).await?;
    Ok(Json(output))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Invalid input or wrong password", body = String),
        (status = 404, description = "Unknown email", body = String),
        (status = 500, description = "Unexpected error", body = String)
    )
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<LoginResponse>> {
    let output = service.login_user(input).await?;
    Ok(Json(output))
}

/// List every user (admin token required)
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(("Authorization" = String, Header, description = "Token, optionally prefixed with `Bearer `")),
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 400, description = "Invalid token or caller is not an admin", body = String),
        (status = 500, description = "Unexpected error", body = String)
    )
)]
async fn get_all_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    AuthorizationToken(token): AuthorizationToken,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.get_all_users(&token).await?;
    Ok(Json(users))
}

/// Find users by name
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserResponse>),
        (status = 404, description = "No user matches", body = String),
        (status = 500, description = "Unexpected error", body = String)
    )
)]
async fn search_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Query(query): Query<SearchQuery>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.find_user_by_name(&query.q).await?;
    Ok(Json(users))
}
