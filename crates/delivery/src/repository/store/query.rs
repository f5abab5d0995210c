use crate::{
    abstract_trait::StoreQueryRepositoryTrait, domain::requests::SearchStores, model::Store,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    query::{Join, PageRequest, Predicate, SearchQuery},
};
use tracing::{error, info};
use uuid::Uuid;

const STORE_COLUMNS: &str = "s.store_id, s.store_name, s.owner_id, s.area_id, \
                             s.created_at, s.updated_at, s.deleted_at, s.deleted_by";

/// Join path for filters that reach through the store-area relation.
const AREA_JOIN: Join = Join {
    table: "p_areas",
    alias: "a",
    on: "a.area_id = s.area_id",
};

#[derive(Clone)]
pub struct StoreQueryRepository {
    db: ConnectionPool,
}

impl StoreQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreQueryRepositoryTrait for StoreQueryRepository {
    async fn search(
        &self,
        req: &SearchStores,
        page: &PageRequest,
    ) -> Result<(Vec<Store>, i64), RepositoryError> {
        info!(
            "🔍 Searching stores: name={:?} id={:?} area_name={:?} area_id={:?}",
            req.store_name, req.store_id, req.area_name, req.area_id
        );

        let plan = SearchQuery::over("p_stores", "s", "store_id")
            .filter(Predicate::contains("s.store_name", req.store_name.as_deref()))
            .filter(Predicate::id_eq("s.store_id", req.store_id))
            .filter(Predicate::text_eq_via(
                AREA_JOIN,
                "a.name",
                req.area_name.as_deref(),
            ))
            .filter(Predicate::id_eq_via(AREA_JOIN, "a.area_id", req.area_id));

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut select = plan.select(STORE_COLUMNS, page);
        let stores = select
            .build_query_as::<Store>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to search stores: {e:?}");
                RepositoryError::from(e)
            })?;

        let mut count = plan.count();
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok((stores, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Store>(
            r#"
            SELECT store_id, store_name, owner_id, area_id,
                   created_at, updated_at, deleted_at, deleted_by
            FROM p_stores
            WHERE store_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
