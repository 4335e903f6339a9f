use axum::Router;
use domain_posts::{InMemoryPostRepository, PgPostRepository, PostRepository, PostService};
use domain_users::{InMemoryUserRepository, PgUserRepository, UserRepository, UserService};

use crate::state::AppState;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Repositories follow the configured backend: PostgreSQL when a connection
/// is present, process-local maps otherwise.
pub fn routes(state: &AppState) -> Router {
    match &state.db {
        Some(db) => domain_routes(
            PgUserRepository::new(db.clone()),
            PgPostRepository::new(db.clone()),
            state,
        ),
        None => domain_routes(
            InMemoryUserRepository::new(),
            InMemoryPostRepository::new(),
            state,
        ),
    }
}

fn domain_routes<U, P>(users: U, posts: P, state: &AppState) -> Router
where
    U: UserRepository + Clone + 'static,
    P: PostRepository + 'static,
{
    let user_service = UserService::new(users.clone(), state.tokens.clone());
    let post_service = PostService::new(posts, users);

    Router::new()
        .nest("/users", domain_users::handlers::router(user_service))
        .nest("/posts", domain_posts::handlers::router(post_service))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
