use database::{IdGenerator, UuidV7Generator};
use domain_users::UserRepository;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{PostError, PostResult};
use crate::models::{
    CreatePost, CreatePostResponse, EditPost, MessageResponse, Post, PostLookup, PostQuery,
    PostWithUserName,
};
use crate::repository::PostRepository;

pub const CREATED_MESSAGE: &str = "Post created successfully";
pub const DELETED_MESSAGE: &str = "Post deleted successfully";
pub const UPDATED_MESSAGE: &str = "Post updated successfully";
pub const FOUND_MESSAGE: &str = "Post found";
pub const LISTED_MESSAGE: &str = "Posts found";

/// Service layer for Post business logic
///
/// Reads creators through the users repository to enrich new posts.
#[derive(Clone)]
pub struct PostService<P: PostRepository, U: UserRepository> {
    posts: Arc<P>,
    users: Arc<U>,
    ids: Arc<dyn IdGenerator>,
}

impl<P: PostRepository, U: UserRepository> PostService<P, U> {
    pub fn new(posts: P, users: U) -> Self {
        Self {
            posts: Arc::new(posts),
            users: Arc::new(users),
            ids: Arc::new(UuidV7Generator),
        }
    }

    /// Replace the identifier source (tests use a deterministic one).
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Persist a new post with zero likes and dislikes, then enrich it with
    /// the creator's name and registration time.
    pub async fn create_post(&self, input: CreatePost) -> PostResult<CreatePostResponse> {
        let post = Post::new(self.ids.generate(), input.creator_id, input.content);
        let created = self.posts.create(post).await?;

        let creator = self.users.get_by_id(created.creator_id).await?;
        if creator.is_none() {
            tracing::warn!(
                post_id = %created.id,
                creator_id = %created.creator_id,
                "Post references an unknown creator"
            );
        }

        let (name, created_at) = match creator {
            Some(user) => (Some(user.name), Some(user.created_at)),
            None => (None, None),
        };

        Ok(CreatePostResponse {
            message: CREATED_MESSAGE.to_string(),
            new_post_with_user_name: PostWithUserName {
                id: created.id,
                creator_id: created.creator_id,
                content: created.content,
                likes: created.likes,
                dislikes: created.dislikes,
                name,
                created_at,
            },
        })
    }

    pub async fn delete_post(&self, id: Uuid) -> PostResult<MessageResponse> {
        if !self.posts.delete(id).await? {
            return Err(PostError::post_not_found(id));
        }

        Ok(MessageResponse {
            message: DELETED_MESSAGE.to_string(),
        })
    }

    /// Overwrite the fields present in `edit`.
    pub async fn edit_post(&self, edit: EditPost) -> PostResult<MessageResponse> {
        self.posts.update(edit).await?;

        Ok(MessageResponse {
            message: UPDATED_MESSAGE.to_string(),
        })
    }

    pub async fn get_post_by_id(&self, id: Uuid) -> PostResult<PostLookup> {
        let post = self
            .posts
            .get_by_id(id)
            .await?
            .ok_or_else(|| PostError::post_not_found(id))?;

        Ok(PostLookup::One {
            message: FOUND_MESSAGE.to_string(),
            post,
        })
    }

    pub async fn get_post_by_creator(&self, creator_id: Uuid) -> PostResult<PostLookup> {
        let posts = self.posts.list_by_creator(creator_id).await?;

        if posts.is_empty() {
            return Err(PostError::NotFound(format!(
                "No posts found for creator {}",
                creator_id
            )));
        }

        Ok(PostLookup::Many {
            message: LISTED_MESSAGE.to_string(),
            posts,
        })
    }

    pub async fn get_all_posts(&self) -> PostResult<PostLookup> {
        let posts = self.posts.list().await?;

        if posts.is_empty() {
            return Err(PostError::NotFound("No posts found".to_string()));
        }

        Ok(PostLookup::Many {
            message: LISTED_MESSAGE.to_string(),
            posts,
        })
    }

    /// Dispatch a lookup: `id` wins over `creator_id`; neither lists everything.
    pub async fn get_posts(&self, query: PostQuery) -> PostResult<PostLookup> {
        match query {
            PostQuery { id: Some(id), .. } => self.get_post_by_id(id).await,
            PostQuery {
                creator_id: Some(creator_id),
                ..
            } => self.get_post_by_creator(creator_id).await,
            PostQuery { .. } => self.get_all_posts().await,
        }
    }
}
