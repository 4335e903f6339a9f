use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{PostError, PostResult};
use crate::models::{EditPost, Post};

/// Repository trait for Post persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fails with [`PostError::AlreadyExists`] if the id is taken.
    async fn create(&self, post: Post) -> PostResult<Post>;

    async fn get_by_id(&self, id: Uuid) -> PostResult<Option<Post>>;

    /// Posts by one creator, newest first.
    async fn list_by_creator(&self, creator_id: Uuid) -> PostResult<Vec<Post>>;

    /// All posts, newest first.
    async fn list(&self) -> PostResult<Vec<Post>>;

    /// Apply a partial update. Fails with [`PostError::NotFound`] if the post is absent.
    async fn update(&self, edit: EditPost) -> PostResult<Post>;

    /// Returns whether a post was removed.
    async fn delete(&self, id: Uuid) -> PostResult<bool>;
}

/// In-memory implementation of PostRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> PostResult<Post> {
        let mut posts = self.posts.write().await;

        if posts.contains_key(&post.id) {
            return Err(PostError::already_exists());
        }

        posts.insert(post.id, post.clone());

        tracing::info!(post_id = %post.id, creator_id = %post.creator_id, "Created post");
        Ok(post)
    }

    async fn get_by_id(&self, id: Uuid) -> PostResult<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn list_by_creator(&self, creator_id: Uuid) -> PostResult<Vec<Post>> {
        let posts = self.posts.read().await;
        let matches = posts
            .values()
            .filter(|p| p.creator_id == creator_id)
            .cloned()
            .collect();
        Ok(newest_first(matches))
    }

    async fn list(&self) -> PostResult<Vec<Post>> {
        let posts = self.posts.read().await;
        Ok(newest_first(posts.values().cloned().collect()))
    }

    async fn update(&self, edit: EditPost) -> PostResult<Post> {
        let mut posts = self.posts.write().await;
        let id = edit.id;

        let post = posts
            .get_mut(&id)
            .ok_or_else(|| PostError::post_not_found(id))?;
        post.apply_edit(edit);

        tracing::info!(post_id = %id, "Updated post");
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> PostResult<bool> {
        let mut posts = self.posts.write().await;

        if posts.remove(&id).is_some() {
            tracing::info!(post_id = %id, "Deleted post");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
