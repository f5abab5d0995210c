use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One recorded exchange with the AI assistant. The generation itself
/// happens outside this service; only the request/response pair is kept.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AiLog {
    pub ai_log_id: Uuid,
    pub user_id: Uuid,
    pub req_text: String,
    pub resp_text: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}
