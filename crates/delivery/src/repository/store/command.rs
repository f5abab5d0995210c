use crate::{
    abstract_trait::StoreCommandRepositoryTrait, domain::requests::StoreRequest, model::Store,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

const STORE_RETURNING: &str = "store_id, store_name, owner_id, area_id, \
                               created_at, updated_at, deleted_at, deleted_by";

pub struct StoreCommandRepository {
    db: ConnectionPool,
}

impl StoreCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreCommandRepositoryTrait for StoreCommandRepository {
    async fn create(&self, req: &StoreRequest) -> Result<Store, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let store = sqlx::query_as::<_, Store>(&format!(
            r#"
            INSERT INTO p_stores (store_id, store_name, owner_id, area_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {STORE_RETURNING}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&req.store_name)
        .bind(req.owner_id)
        .bind(req.area_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create store {}: {err:?}", req.store_name);
            RepositoryError::from(err)
        })?;

        for category_id in &req.category_ids {
            sqlx::query(
                r#"
                INSERT INTO p_store_categories (store_id, category_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(store.store_id)
            .bind(*category_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to link store {} to category {category_id}: {err:?}",
                    store.store_id
                );
                RepositoryError::from(err)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created store {} ({})", store.store_name, store.store_id);
        Ok(store)
    }

    async fn update(
        &self,
        id: Uuid,
        req: &StoreRequest,
    ) -> Result<Option<Store>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let store = sqlx::query_as::<_, Store>(&format!(
            r#"
            UPDATE p_stores
            SET store_name = $2,
                owner_id   = $3,
                area_id    = $4,
                updated_at = current_timestamp
            WHERE store_id = $1 AND deleted_at IS NULL
            RETURNING {STORE_RETURNING}
            "#
        ))
        .bind(id)
        .bind(&req.store_name)
        .bind(req.owner_id)
        .bind(req.area_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update store {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        let Some(store) = store else {
            return Ok(None);
        };

        // replace category links wholesale
        sqlx::query("DELETE FROM p_store_categories WHERE store_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        for category_id in &req.category_ids {
            sqlx::query(
                r#"
                INSERT INTO p_store_categories (store_id, category_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(id)
            .bind(*category_id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated store {id}");
        Ok(Some(store))
    }

    async fn soft_delete(
        &self,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<Option<Store>, RepositoryError> {
        info!("🗑️ Soft deleting store {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let store = sqlx::query_as::<_, Store>(&format!(
            r#"
            UPDATE p_stores
            SET deleted_at = current_timestamp,
                deleted_by = $2
            WHERE store_id = $1 AND deleted_at IS NULL
            RETURNING {STORE_RETURNING}
            "#
        ))
        .bind(id)
        .bind(deleted_by)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to soft delete store {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(store)
    }
}
