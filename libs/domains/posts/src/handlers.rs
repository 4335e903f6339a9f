use axum::{
    Json, Router,
    // Aliased so `utoipa::path` does not infer a `Bytes` request body (no `ToSchema`).
    body::Bytes as RawBody,
    extract::{Query, State},
    http::StatusCode,
    routing::post,
};
use axum_helpers::{AppError, ValidatedJson};
use domain_users::UserRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PostResult;
use crate::models::{
    CreatePost, CreatePostResponse, DeletePost, EditPost, MessageResponse, Post, PostLookup,
    PostQuery, PostWithUserName,
};
use crate::repository::PostRepository;
use crate::service::PostService;

pub const TAG: &str = "posts";

/// OpenAPI documentation for Posts API
#[derive(OpenApi)]
#[openapi(
    paths(create_post, delete_post, edit_post, get_posts),
    components(schemas(
        Post,
        CreatePost,
        CreatePostResponse,
        DeletePost,
        EditPost,
        MessageResponse,
        PostLookup,
        PostWithUserName
    )),
    tags((name = TAG, description = "Post submission, editing and lookup"))
)]
pub struct ApiDoc;

type SharedService<P, U> = Arc<PostService<P, U>>;

/// Create the posts router with all HTTP endpoints
pub fn router<P, U>(service: PostService<P, U>) -> Router
where
    P: PostRepository + 'static,
    U: UserRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            post(create_post)
                .delete(delete_post)
                .put(edit_post)
                .get(get_posts),
        )
        .with_state(shared_service)
}

/// Submit a post
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreatePost,
    responses(
        (status = 200, description = "Post created", body = CreatePostResponse),
        (status = 400, description = "Invalid input", body = String),
        (status = 409, description = "Identifier already taken", body = String),
        (status = 500, description = "Unexpected error", body = String)
    )
)]
async fn create_post<P: PostRepository, U: UserRepository>(
    State(service): State<SharedService<P, U>>,
    ValidatedJson(input): ValidatedJson<CreatePost>,
) -> PostResult<Json<CreatePostResponse>> {
    let output = service.create_post(input).await?;
    Ok(Json(output))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "",
    tag = TAG,
    request_body = DeletePost,
    responses(
        (status = 201, description = "Post deleted", body = MessageResponse),
        (status = 400, description = "Invalid input", body = String),
        (status = 404, description = "Post not found", body = String),
        (status = 500, description = "Unexpected error", body = String)
    )
)]
async fn delete_post<P: PostRepository, U: UserRepository>(
    State(service): State<SharedService<P, U>>,
    ValidatedJson(input): ValidatedJson<DeletePost>,
) -> PostResult<(StatusCode, Json<MessageResponse>)> {
    let output = service.delete_post(input.id).await?;
    Ok((StatusCode::CREATED, Json(output)))
}

/// Overwrite fields of a post
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    request_body = EditPost,
    responses(
        (status = 201, description = "Post updated", body = MessageResponse),
        (status = 400, description = "Invalid input", body = String),
        (status = 404, description = "Post not found", body = String),
        (status = 500, description = "Unexpected error", body = String)
    )
)]
async fn edit_post<P: PostRepository, U: UserRepository>(
    State(service): State<SharedService<P, U>>,
    ValidatedJson(input): ValidatedJson<EditPost>,
) -> PostResult<(StatusCode, Json<MessageResponse>)> {
    let output = service.edit_post(input).await?;
    Ok((StatusCode::CREATED, Json(output)))
}

/// Look up one post by id, the posts of a creator, or every post
///
/// Selectors may come from the query string or a JSON body; body fields win.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PostQuery),
    responses(
        (status = 201, description = "Post or posts found", body = PostLookup),
        (status = 400, description = "Malformed body", body = String),
        (status = 404, description = "Nothing found", body = String),
        (status = 500, description = "Unexpected error", body = String)
    )
)]
async fn get_posts<P: PostRepository, U: UserRepository>(
    State(service): State<SharedService<P, U>>,
    Query(query): Query<PostQuery>,
    body: RawBody,
) -> Result<(StatusCode, Json<PostLookup>), AppError> {
    let query = match parse_body_query(&body)? {
        Some(from_body) => query.merge(from_body),
        None => query,
    };

    let output = service.get_posts(query).await?;
    Ok((StatusCode::CREATED, Json(output)))
}

fn parse_body_query(body: &[u8]) -> Result<Option<PostQuery>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(|err| AppError::Validation(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_empty_body_has_no_selectors() {
        assert_eq!(parse_body_query(b"").unwrap(), None);
        assert_eq!(parse_body_query(b"  \n").unwrap(), None);
    }

    #[test]
    fn test_body_selectors() {
        let id = Uuid::now_v7();
        let body = format!(r#"{{"creatorId": "{}"}}"#, id);

        let query = parse_body_query(body.as_bytes()).unwrap().unwrap();

        assert_eq!(query.creator_id, Some(id));
        assert_eq!(query.id, None);
    }

    #[test]
    fn test_malformed_body_is_validation_error() {
        let result = parse_body_query(b"{not json");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
