use crate::{
    abstract_trait::CategoryCommandRepositoryTrait, domain::requests::CategoryRequest,
    model::Category,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create(&self, req: &CategoryRequest) -> Result<Category, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO p_categories (category_id, name, created_at, updated_at)
            VALUES ($1, $2, current_timestamp, current_timestamp)
            RETURNING category_id, name, created_at, updated_at, deleted_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {}: {err:?}", req.name);
            RepositoryError::from(err)
        })?;

        info!("✅ Created category {} ({})", category.name, category.category_id);
        Ok(category)
    }

    async fn update(
        &self,
        id: Uuid,
        req: &CategoryRequest,
    ) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE p_categories
            SET name       = $2,
                updated_at = current_timestamp
            WHERE category_id = $1 AND deleted_at IS NULL
            RETURNING category_id, name, created_at, updated_at, deleted_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if category.is_some() {
            info!("🔄 Updated category {id}");
        }
        Ok(category)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        info!("🗑️ Soft deleting category {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE p_categories
            SET deleted_at = current_timestamp
            WHERE category_id = $1 AND deleted_at IS NULL
            RETURNING category_id, name, created_at, updated_at, deleted_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to soft delete category {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(category)
    }
}
