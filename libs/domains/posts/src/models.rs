use axum_helpers::FieldOrder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Post entity - matches SQL schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: Uuid,
    /// Author reference; not guaranteed to resolve to a user
    #[serde(rename = "creator_Id")]
    pub creator_id: Uuid,
    pub content: String,
    pub likes: i32,
    pub dislikes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// A fresh post starts with no likes and no dislikes.
    pub fn new(id: Uuid, creator_id: Uuid, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            creator_id,
            content,
            likes: 0,
            dislikes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every field present in `edit`.
    pub fn apply_edit(&mut self, edit: EditPost) {
        if let Some(creator_id) = edit.creator_id {
            self.creator_id = creator_id;
        }
        if let Some(content) = edit.content {
            self.content = content;
        }
        if let Some(likes) = edit.likes {
            self.likes = likes;
        }
        if let Some(dislikes) = edit.dislikes {
            self.dislikes = dislikes;
        }
        self.updated_at = Utc::now();
    }
}

/// DTO for creating a post
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePost {
    #[serde(rename = "creator_Id")]
    pub creator_id: Uuid,
    #[validate(length(min = 1, message = "'content' must not be empty"))]
    pub content: String,
}

impl FieldOrder for CreatePost {
    const FIELD_ORDER: &'static [&'static str] = &["creator_id", "content"];
}

/// Partial update of a post.
///
/// Any non-key column may be overwritten; fields not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct EditPost {
    pub id: Uuid,
    #[serde(default, rename = "creator_Id")]
    pub creator_id: Option<Uuid>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub likes: Option<i32>,
    #[serde(default)]
    pub dislikes: Option<i32>,
}

impl FieldOrder for EditPost {
    const FIELD_ORDER: &'static [&'static str] =
        &["id", "creator_id", "content", "likes", "dislikes"];
}

/// DTO for deleting a post
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeletePost {
    pub id: Uuid,
}

impl FieldOrder for DeletePost {
    const FIELD_ORDER: &'static [&'static str] = &["id"];
}

/// Lookup selector for `GET /posts`: by id, by creator, or everything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostQuery {
    pub id: Option<Uuid>,
    #[serde(rename = "creatorId")]
    pub creator_id: Option<Uuid>,
}

impl PostQuery {
    /// Fields set in `other` win.
    pub fn merge(self, other: PostQuery) -> PostQuery {
        PostQuery {
            id: other.id.or(self.id),
            creator_id: other.creator_id.or(self.creator_id),
        }
    }
}

/// A post enriched with its creator's name and registration time.
///
/// Both creator fields are null when the creator does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostWithUserName {
    pub id: Uuid,
    #[serde(rename = "creator_Id")]
    pub creator_id: Uuid,
    pub content: String,
    pub likes: i32,
    pub dislikes: i32,
    /// Creator's display name
    pub name: Option<String>,
    /// Creator's registration time
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostResponse {
    pub message: String,
    #[serde(rename = "newPostWithUserName")]
    pub new_post_with_user_name: PostWithUserName,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Result of a post lookup: a single post or a list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PostLookup {
    One { message: String, post: Post },
    Many { message: String, posts: Vec<Post> },
}
