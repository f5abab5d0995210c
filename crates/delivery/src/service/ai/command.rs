use crate::{
    abstract_trait::{AiLogCommandServiceTrait, DynAiLogCommandRepository},
    domain::{requests::CreateAiLogRequest, response::AiLogResponse},
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use tracing::info;
use uuid::Uuid;

pub struct AiLogCommandService {
    command: DynAiLogCommandRepository,
}

impl AiLogCommandService {
    pub fn new(command: DynAiLogCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl AiLogCommandServiceTrait for AiLogCommandService {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateAiLogRequest,
    ) -> Result<ApiResponse<AiLogResponse>, ServiceError> {
        info!("📝 Recording AI exchange for user {user_id}");

        let log = self.command.create(user_id, req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "AI log recorded successfully".to_string(),
            data: AiLogResponse::from(log),
        })
    }
}
