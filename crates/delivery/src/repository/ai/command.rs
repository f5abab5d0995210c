use crate::{
    abstract_trait::AiLogCommandRepositoryTrait, domain::requests::CreateAiLogRequest,
    model::AiLog,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

pub struct AiLogCommandRepository {
    db: ConnectionPool,
}

impl AiLogCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AiLogCommandRepositoryTrait for AiLogCommandRepository {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateAiLogRequest,
    ) -> Result<AiLog, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let log = sqlx::query_as::<_, AiLog>(
            r#"
            INSERT INTO p_ai_logs (ai_log_id, user_id, req_text, resp_text, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING ai_log_id, user_id, req_text, resp_text, created_at, updated_at, deleted_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&req.req_text)
        .bind(&req.resp_text)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to record AI log for user {user_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        info!("✅ Recorded AI log {} for user {user_id}", log.ai_log_id);
        Ok(log)
    }
}
