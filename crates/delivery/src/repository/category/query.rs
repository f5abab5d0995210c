use crate::{
    abstract_trait::CategoryQueryRepositoryTrait, domain::requests::SearchCategories,
    model::Category,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    query::{PageRequest, Predicate, SearchQuery},
};
use tracing::{error, info};
use uuid::Uuid;

const CATEGORY_COLUMNS: &str = "c.category_id, c.name, c.created_at, c.updated_at, c.deleted_at";

#[derive(Clone)]
pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn search(
        &self,
        req: &SearchCategories,
        page: &PageRequest,
    ) -> Result<(Vec<Category>, i64), RepositoryError> {
        info!("🔍 Searching categories: name={:?}", req.name);

        let plan = SearchQuery::over("p_categories", "c", "category_id")
            .filter(Predicate::contains("c.name", req.name.as_deref()));

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut select = plan.select(CATEGORY_COLUMNS, page);
        let categories = select
            .build_query_as::<Category>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to search categories: {e:?}");
                RepositoryError::from(e)
            })?;

        let mut count = plan.count();
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok((categories, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name, created_at, updated_at, deleted_at
            FROM p_categories
            WHERE category_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
