use crate::{abstract_trait::AiLogQueryRepositoryTrait, model::AiLog};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    query::{PageRequest, SearchQuery},
};
use tracing::{error, info};

const AI_LOG_COLUMNS: &str = "l.ai_log_id, l.user_id, l.req_text, l.resp_text, \
                              l.created_at, l.updated_at, l.deleted_at";

#[derive(Clone)]
pub struct AiLogQueryRepository {
    db: ConnectionPool,
}

impl AiLogQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AiLogQueryRepositoryTrait for AiLogQueryRepository {
    async fn find_all(&self, page: &PageRequest) -> Result<(Vec<AiLog>, i64), RepositoryError> {
        info!("🔍 Fetching AI logs, page {}", page.page());

        let plan = SearchQuery::over("p_ai_logs", "l", "ai_log_id");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut select = plan.select(AI_LOG_COLUMNS, page);
        let logs = select
            .build_query_as::<AiLog>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch AI logs: {e:?}");
                RepositoryError::from(e)
            })?;

        let mut count = plan.count();
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok((logs, total))
    }
}
