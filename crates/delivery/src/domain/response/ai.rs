use crate::model::AiLog;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AiLogResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub req_text: String,
    pub resp_text: String,
    pub created_at: Option<String>,
}

impl From<AiLog> for AiLogResponse {
    fn from(value: AiLog) -> Self {
        AiLogResponse {
            id: value.ai_log_id,
            user_id: value.user_id,
            req_text: value.req_text,
            resp_text: value.resp_text,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
