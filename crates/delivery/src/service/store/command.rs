use crate::{
    abstract_trait::{
        DynAreaQueryRepository, DynCategoryQueryRepository, DynStoreCommandRepository,
        DynUserQueryRepository, StoreCommandServiceTrait,
    },
    domain::{requests::StoreRequest, response::StoreResponse},
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use tracing::{error, info};
use uuid::Uuid;

pub struct StoreCommandService {
    user_query: DynUserQueryRepository,
    area_query: DynAreaQueryRepository,
    category_query: DynCategoryQueryRepository,
    command: DynStoreCommandRepository,
}

pub struct StoreCommandServiceDeps {
    pub user_query: DynUserQueryRepository,
    pub area_query: DynAreaQueryRepository,
    pub category_query: DynCategoryQueryRepository,
    pub command: DynStoreCommandRepository,
}

impl StoreCommandService {
    pub fn new(deps: StoreCommandServiceDeps) -> Self {
        let StoreCommandServiceDeps {
            user_query,
            area_query,
            category_query,
            command,
        } = deps;

        Self {
            user_query,
            area_query,
            category_query,
            command,
        }
    }

    /// Referenced entities must exist before a store row may point at them.
    async fn check_references(&self, req: &StoreRequest) -> Result<(), ServiceError> {
        self.user_query
            .find_by_id(req.owner_id)
            .await?
            .ok_or_else(|| {
                error!("❌ Owner {} not found", req.owner_id);
                ServiceError::NotFound("User".to_string())
            })?;

        self.area_query
            .find_by_id(req.area_id)
            .await?
            .ok_or_else(|| {
                error!("❌ Area {} not found", req.area_id);
                ServiceError::NotFound("Area".to_string())
            })?;

        for category_id in &req.category_ids {
            self.category_query
                .find_by_id(*category_id)
                .await?
                .ok_or_else(|| {
                    error!("❌ Category {category_id} not found");
                    ServiceError::NotFound("Category".to_string())
                })?;
        }

        Ok(())
    }
}

#[async_trait]
impl StoreCommandServiceTrait for StoreCommandService {
    async fn create(&self, req: &StoreRequest) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        info!("🏗️ Creating store {}", req.store_name);

        self.check_references(req).await?;

        let store = self.command.create(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Store created successfully".to_string(),
            data: StoreResponse::from(store),
        })
    }

    async fn update(
        &self,
        id: Uuid,
        req: &StoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        self.check_references(req).await?;

        let store = self
            .command
            .update(id, req)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Store".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Store updated successfully".to_string(),
            data: StoreResponse::from(store),
        })
    }

    async fn delete(
        &self,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        let store = self
            .command
            .soft_delete(id, deleted_by)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Store".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Store deleted successfully".to_string(),
            data: StoreResponse::from(store),
        })
    }
}
