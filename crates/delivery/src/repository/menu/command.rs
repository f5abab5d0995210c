use crate::{abstract_trait::MenuCommandRepositoryTrait, domain::requests::MenuRequest, model::Menu};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

const MENU_RETURNING: &str = "menu_id, store_id, category_id, name, price, \
                              photo_url, description, created_at, updated_at, deleted_at";

pub struct MenuCommandRepository {
    db: ConnectionPool,
}

impl MenuCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuCommandRepositoryTrait for MenuCommandRepository {
    async fn create(&self, store_id: Uuid, req: &MenuRequest) -> Result<Menu, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let menu = sqlx::query_as::<_, Menu>(&format!(
            r#"
            INSERT INTO p_menus
                (menu_id, store_id, category_id, name, price, photo_url, description,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, current_timestamp, current_timestamp)
            RETURNING {MENU_RETURNING}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(req.category_id)
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.photo_url)
        .bind(&req.description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create menu {} for store {store_id}: {err:?}", req.name);
            RepositoryError::from(err)
        })?;

        info!("✅ Created menu {} ({})", menu.name, menu.menu_id);
        Ok(menu)
    }

    async fn update(&self, id: Uuid, req: &MenuRequest) -> Result<Option<Menu>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let menu = sqlx::query_as::<_, Menu>(&format!(
            r#"
            UPDATE p_menus
            SET category_id = $2,
                name        = $3,
                price       = $4,
                photo_url   = $5,
                description = $6,
                updated_at  = current_timestamp
            WHERE menu_id = $1 AND deleted_at IS NULL
            RETURNING {MENU_RETURNING}
            "#
        ))
        .bind(id)
        .bind(req.category_id)
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.photo_url)
        .bind(&req.description)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update menu {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if menu.is_some() {
            info!("🔄 Updated menu {id}");
        }
        Ok(menu)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<Option<Menu>, RepositoryError> {
        info!("🗑️ Soft deleting menu {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let menu = sqlx::query_as::<_, Menu>(&format!(
            r#"
            UPDATE p_menus
            SET deleted_at = current_timestamp
            WHERE menu_id = $1 AND deleted_at IS NULL
            RETURNING {MENU_RETURNING}
            "#
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to soft delete menu {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(menu)
    }
}
