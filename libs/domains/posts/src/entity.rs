use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{EditPost, Post};

/// Sea-ORM Entity for the posts table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub creator_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub likes: i32,
    pub dislikes: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            creator_id: model.creator_id,
            content: model.content,
            likes: model.likes,
            dislikes: model.dislikes,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        ActiveModel {
            id: Set(post.id),
            creator_id: Set(post.creator_id),
            content: Set(post.content),
            likes: Set(post.likes),
            dislikes: Set(post.dislikes),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}

/// Only the fields present in the edit are written; `updated_at` always is.
impl From<EditPost> for ActiveModel {
    fn from(edit: EditPost) -> Self {
        fn set_if<T: Into<sea_orm::Value>>(value: Option<T>) -> sea_orm::ActiveValue<T> {
            value.map_or(NotSet, Set)
        }

        ActiveModel {
            id: Set(edit.id),
            creator_id: set_if(edit.creator_id),
            content: set_if(edit.content),
            likes: set_if(edit.likes),
            dislikes: set_if(edit.dislikes),
            created_at: NotSet,
            updated_at: Set(chrono::Utc::now().into()),
        }
    }
}
