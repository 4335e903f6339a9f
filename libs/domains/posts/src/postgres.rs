use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{PostError, PostResult},
    models::{EditPost, Post},
    repository::PostRepository,
};

/// PostgreSQL implementation of PostRepository using SeaORM
#[derive(Clone)]
pub struct PgPostRepository {
    db: DatabaseConnection,
}

impl PgPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, post: Post) -> PostResult<Post> {
        let active_model: entity::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(post_id = %model.id, creator_id = %model.creator_id, "Created post");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> PostResult<Option<Post>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_creator(&self, creator_id: Uuid) -> PostResult<Vec<Post>> {
        let models = entity::Entity::find()
            .filter(entity::Column::CreatorId.eq(creator_id))
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list(&self) -> PostResult<Vec<Post>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, edit: EditPost) -> PostResult<Post> {
        let id = edit.id;
        let active_model: entity::ActiveModel = edit.into();

        // Single UPDATE ... RETURNING; no row means no such post.
        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => PostError::post_not_found(id),
            other => other.into(),
        })?;

        tracing::info!(post_id = %id, "Updated post");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> PostResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(post_id = %id, "Deleted post");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(content: &str) -> entity::Model {
        let now = chrono::Utc::now();
        entity::Model {
            id: Uuid::now_v7(),
            creator_id: Uuid::now_v7(),
            content: content.to_string(),
            likes: 0,
            dislikes: 0,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("b"), model("a")]])
            .into_connection();

        let posts = PgPostRepository::new(db).list().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, "b");
    }

    #[tokio::test]
    async fn test_update_without_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let result = PgPostRepository::new(db)
            .update(EditPost {
                id: Uuid::now_v7(),
                likes: Some(1),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(PostError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_error_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = PgPostRepository::new(db).get_by_id(Uuid::now_v7()).await;
        assert!(matches!(result, Err(PostError::Internal(_))));
    }
}
