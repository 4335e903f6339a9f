//! Posts Domain
//!
//! Post submission, partial edits, deletion and lookups. New posts are
//! returned together with their creator's name, read through the users
//! repository.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_posts::{handlers, InMemoryPostRepository, PostService};
//! use domain_users::InMemoryUserRepository;
//!
//! let service = PostService::new(InMemoryPostRepository::new(), InMemoryUserRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{PostError, PostResult};
pub use models::{
    CreatePost, CreatePostResponse, DeletePost, EditPost, MessageResponse, Post, PostLookup,
    PostQuery, PostWithUserName,
};
pub use postgres::PgPostRepository;
pub use repository::{InMemoryPostRepository, PostRepository};
pub use service::PostService;
