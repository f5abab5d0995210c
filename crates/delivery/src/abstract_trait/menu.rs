use crate::{
    domain::{
        requests::{MenuRequest, SearchMenus},
        response::MenuResponse,
    },
    model::Menu,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{RepositoryError, ServiceError},
    query::PageRequest,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynMenuQueryRepository = Arc<dyn MenuQueryRepositoryTrait + Send + Sync>;
pub type DynMenuCommandRepository = Arc<dyn MenuCommandRepositoryTrait + Send + Sync>;
pub type DynMenuQueryService = Arc<dyn MenuQueryServiceTrait + Send + Sync>;
pub type DynMenuCommandService = Arc<dyn MenuCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait MenuQueryRepositoryTrait {
    async fn search_by_store(
        &self,
        store_id: Uuid,
        req: &SearchMenus,
        page: &PageRequest,
    ) -> Result<(Vec<Menu>, i64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Menu>, RepositoryError>;
}

#[async_trait]
pub trait MenuCommandRepositoryTrait {
    async fn create(&self, store_id: Uuid, req: &MenuRequest) -> Result<Menu, RepositoryError>;
    async fn update(&self, id: Uuid, req: &MenuRequest) -> Result<Option<Menu>, RepositoryError>;
    async fn soft_delete(&self, id: Uuid) -> Result<Option<Menu>, RepositoryError>;
}

#[async_trait]
pub trait MenuQueryServiceTrait {
    async fn search_by_store(
        &self,
        store_id: Uuid,
        req: &SearchMenus,
    ) -> Result<ApiResponsePagination<Vec<MenuResponse>>, ServiceError>;
}

#[async_trait]
pub trait MenuCommandServiceTrait {
    async fn create(
        &self,
        store_id: Uuid,
        req: &MenuRequest,
    ) -> Result<ApiResponse<MenuResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        req: &MenuRequest,
    ) -> Result<ApiResponse<MenuResponse>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<ApiResponse<MenuResponse>, ServiceError>;
}
