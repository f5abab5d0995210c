use crate::{
    abstract_trait::{AreaCommandServiceTrait, DynAreaCommandRepository},
    domain::{requests::AreaRequest, response::AreaResponse},
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use tracing::info;
use uuid::Uuid;

pub struct AreaCommandService {
    command: DynAreaCommandRepository,
}

impl AreaCommandService {
    pub fn new(command: DynAreaCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl AreaCommandServiceTrait for AreaCommandService {
    async fn create(&self, req: &AreaRequest) -> Result<ApiResponse<AreaResponse>, ServiceError> {
        info!("🏗️ Creating area {} ({})", req.name, req.city);

        let area = self.command.create(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Area created successfully".to_string(),
            data: AreaResponse::from(area),
        })
    }

    async fn update(
        &self,
        id: Uuid,
        req: &AreaRequest,
    ) -> Result<ApiResponse<AreaResponse>, ServiceError> {
        let area = self
            .command
            .update(id, req)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Area".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Area updated successfully".to_string(),
            data: AreaResponse::from(area),
        })
    }

    async fn delete(
        &self,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<ApiResponse<AreaResponse>, ServiceError> {
        let area = self
            .command
            .soft_delete(id, deleted_by)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Area".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Area deleted successfully".to_string(),
            data: AreaResponse::from(area),
        })
    }
}
