use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "User registration and login, admin user listing, and post management"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc),
        (path = "/posts", api = domain_posts::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
