use crate::{
    abstract_trait::{CategoryCommandServiceTrait, DynCategoryCommandRepository},
    domain::{requests::CategoryRequest, response::CategoryResponse},
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use tracing::info;
use uuid::Uuid;

pub struct CategoryCommandService {
    command: DynCategoryCommandRepository,
}

impl CategoryCommandService {
    pub fn new(command: DynCategoryCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create(
        &self,
        req: &CategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🏗️ Creating category {}", req.name);

        let category = self.command.create(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category created successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn update(
        &self,
        id: Uuid,
        req: &CategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = self
            .command
            .update(id, req)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Category".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category updated successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = self
            .command
            .soft_delete(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Category".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category deleted successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }
}
