use crate::{
    abstract_trait::AreaCommandRepositoryTrait, domain::requests::AreaRequest, model::Area,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

pub struct AreaCommandRepository {
    db: ConnectionPool,
}

impl AreaCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AreaCommandRepositoryTrait for AreaCommandRepository {
    async fn create(&self, req: &AreaRequest) -> Result<Area, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let area = sqlx::query_as::<_, Area>(
            r#"
            INSERT INTO p_areas (area_id, name, city, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING area_id, name, city, created_at, updated_at, deleted_at, deleted_by
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.city)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create area {}: {err:?}", req.name);
            RepositoryError::from(err)
        })?;

        info!("✅ Created area {} ({})", area.name, area.area_id);
        Ok(area)
    }

    async fn update(&self, id: Uuid, req: &AreaRequest) -> Result<Option<Area>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let area = sqlx::query_as::<_, Area>(
            r#"
            UPDATE p_areas
            SET name       = $2,
                city       = $3,
                updated_at = current_timestamp
            WHERE area_id = $1 AND deleted_at IS NULL
            RETURNING area_id, name, city, created_at, updated_at, deleted_at, deleted_by
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.city)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update area {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if area.is_some() {
            info!("🔄 Updated area {id}");
        }
        Ok(area)
    }

    async fn soft_delete(
        &self,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<Option<Area>, RepositoryError> {
        info!("🗑️ Soft deleting area {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let area = sqlx::query_as::<_, Area>(
            r#"
            UPDATE p_areas
            SET deleted_at = current_timestamp,
                deleted_by = $2
            WHERE area_id = $1 AND deleted_at IS NULL
            RETURNING area_id, name, city, created_at, updated_at, deleted_at, deleted_by
            "#,
        )
        .bind(id)
        .bind(deleted_by)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to soft delete area {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(area)
    }
}
