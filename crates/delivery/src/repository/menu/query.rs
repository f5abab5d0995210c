use crate::{abstract_trait::MenuQueryRepositoryTrait, domain::requests::SearchMenus, model::Menu};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    query::{PageRequest, Predicate, SearchQuery},
};
use tracing::{error, info};
use uuid::Uuid;

const MENU_COLUMNS: &str = "m.menu_id, m.store_id, m.category_id, m.name, m.price, \
                            m.photo_url, m.description, m.created_at, m.updated_at, m.deleted_at";

#[derive(Clone)]
pub struct MenuQueryRepository {
    db: ConnectionPool,
}

impl MenuQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuQueryRepositoryTrait for MenuQueryRepository {
    async fn search_by_store(
        &self,
        store_id: Uuid,
        req: &SearchMenus,
        page: &PageRequest,
    ) -> Result<(Vec<Menu>, i64), RepositoryError> {
        info!("🔍 Searching menus of store {store_id}: name={:?}", req.name);

        let plan = SearchQuery::over("p_menus", "m", "menu_id")
            .filter(Predicate::id_eq("m.store_id", Some(store_id)))
            .filter(Predicate::contains("m.name", req.name.as_deref()));

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut select = plan.select(MENU_COLUMNS, page);
        let menus = select
            .build_query_as::<Menu>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to search menus: {e:?}");
                RepositoryError::from(e)
            })?;

        let mut count = plan.count();
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok((menus, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Menu>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Menu>(
            r#"
            SELECT menu_id, store_id, category_id, name, price,
                   photo_url, description, created_at, updated_at, deleted_at
            FROM p_menus
            WHERE menu_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
