use crate::{
    abstract_trait::{
        DynCategoryQueryRepository, DynMenuCommandRepository, DynStoreQueryRepository,
        MenuCommandServiceTrait,
    },
    domain::{requests::MenuRequest, response::MenuResponse},
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use tracing::{error, info};
use uuid::Uuid;

pub struct MenuCommandService {
    store_query: DynStoreQueryRepository,
    category_query: DynCategoryQueryRepository,
    command: DynMenuCommandRepository,
}

pub struct MenuCommandServiceDeps {
    pub store_query: DynStoreQueryRepository,
    pub category_query: DynCategoryQueryRepository,
    pub command: DynMenuCommandRepository,
}

impl MenuCommandService {
    pub fn new(deps: MenuCommandServiceDeps) -> Self {
        let MenuCommandServiceDeps {
            store_query,
            category_query,
            command,
        } = deps;

        Self {
            store_query,
            category_query,
            command,
        }
    }

    async fn check_category(&self, category_id: Uuid) -> Result<(), ServiceError> {
        self.category_query
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| {
                error!("❌ Category {category_id} not found");
                ServiceError::NotFound("Category".to_string())
            })?;
        Ok(())
    }
}

#[async_trait]
impl MenuCommandServiceTrait for MenuCommandService {
    async fn create(
        &self,
        store_id: Uuid,
        req: &MenuRequest,
    ) -> Result<ApiResponse<MenuResponse>, ServiceError> {
        info!("🏗️ Creating menu {} for store {store_id}", req.name);

        self.store_query
            .find_by_id(store_id)
            .await?
            .ok_or_else(|| {
                error!("❌ Store {store_id} not found");
                ServiceError::NotFound("Store".to_string())
            })?;

        self.check_category(req.category_id).await?;

        let menu = self.command.create(store_id, req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Menu created successfully".to_string(),
            data: MenuResponse::from(menu),
        })
    }

    async fn update(
        &self,
        id: Uuid,
        req: &MenuRequest,
    ) -> Result<ApiResponse<MenuResponse>, ServiceError> {
        self.check_category(req.category_id).await?;

        let menu = self
            .command
            .update(id, req)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Menu".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Menu updated successfully".to_string(),
            data: MenuResponse::from(menu),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<ApiResponse<MenuResponse>, ServiceError> {
        let menu = self
            .command
            .soft_delete(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Menu".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Menu deleted successfully".to_string(),
            data: MenuResponse::from(menu),
        })
    }
}
