use crate::{
    domain::{
        requests::{AreaRequest, SearchAreas},
        response::AreaResponse,
    },
    model::Area,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{RepositoryError, ServiceError},
    query::PageRequest,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynAreaQueryRepository = Arc<dyn AreaQueryRepositoryTrait + Send + Sync>;
pub type DynAreaCommandRepository = Arc<dyn AreaCommandRepositoryTrait + Send + Sync>;
pub type DynAreaQueryService = Arc<dyn AreaQueryServiceTrait + Send + Sync>;
pub type DynAreaCommandService = Arc<dyn AreaCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait AreaQueryRepositoryTrait {
    async fn search(
        &self,
        req: &SearchAreas,
        page: &PageRequest,
    ) -> Result<(Vec<Area>, i64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Area>, RepositoryError>;
}

#[async_trait]
pub trait AreaCommandRepositoryTrait {
    async fn create(&self, req: &AreaRequest) -> Result<Area, RepositoryError>;
    async fn update(&self, id: Uuid, req: &AreaRequest) -> Result<Option<Area>, RepositoryError>;
    async fn soft_delete(
        &self,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<Option<Area>, RepositoryError>;
}

#[async_trait]
pub trait AreaQueryServiceTrait {
    async fn search(
        &self,
        req: &SearchAreas,
    ) -> Result<ApiResponsePagination<Vec<AreaResponse>>, ServiceError>;
}

#[async_trait]
pub trait AreaCommandServiceTrait {
    async fn create(&self, req: &AreaRequest) -> Result<ApiResponse<AreaResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        req: &AreaRequest,
    ) -> Result<ApiResponse<AreaResponse>, ServiceError>;
    async fn delete(
        &self,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<ApiResponse<AreaResponse>, ServiceError>;
}
