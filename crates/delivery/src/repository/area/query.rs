use crate::{abstract_trait::AreaQueryRepositoryTrait, domain::requests::SearchAreas, model::Area};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    query::{PageRequest, Predicate, SearchQuery},
};
use tracing::{error, info};
use uuid::Uuid;

const AREA_COLUMNS: &str =
    "a.area_id, a.name, a.city, a.created_at, a.updated_at, a.deleted_at, a.deleted_by";

#[derive(Clone)]
pub struct AreaQueryRepository {
    db: ConnectionPool,
}

impl AreaQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AreaQueryRepositoryTrait for AreaQueryRepository {
    async fn search(
        &self,
        req: &SearchAreas,
        page: &PageRequest,
    ) -> Result<(Vec<Area>, i64), RepositoryError> {
        info!(
            "🔍 Searching areas: city={:?} name={:?} id={:?}",
            req.city, req.area_name, req.area_id
        );

        let plan = SearchQuery::over("p_areas", "a", "area_id")
            .filter(Predicate::text_eq("a.city", req.city.as_deref()))
            .filter(Predicate::id_eq("a.area_id", req.area_id))
            .filter(Predicate::contains("a.name", req.area_name.as_deref()));

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut select = plan.select(AREA_COLUMNS, page);
        let areas = select
            .build_query_as::<Area>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to search areas: {e:?}");
                RepositoryError::from(e)
            })?;

        let mut count = plan.count();
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok((areas, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Area>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Area>(
            r#"
            SELECT area_id, name, city, created_at, updated_at, deleted_at, deleted_by
            FROM p_areas
            WHERE area_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
