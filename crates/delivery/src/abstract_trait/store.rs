use crate::{
    domain::{
        requests::{SearchStores, StoreRequest},
        response::StoreResponse,
    },
    model::Store,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{RepositoryError, ServiceError},
    query::PageRequest,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynStoreQueryRepository = Arc<dyn StoreQueryRepositoryTrait + Send + Sync>;
pub type DynStoreCommandRepository = Arc<dyn StoreCommandRepositoryTrait + Send + Sync>;
pub type DynStoreQueryService = Arc<dyn StoreQueryServiceTrait + Send + Sync>;
pub type DynStoreCommandService = Arc<dyn StoreCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait StoreQueryRepositoryTrait {
    async fn search(
        &self,
        req: &SearchStores,
        page: &PageRequest,
    ) -> Result<(Vec<Store>, i64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, RepositoryError>;
}

#[async_trait]
pub trait StoreCommandRepositoryTrait {
    async fn create(&self, req: &StoreRequest) -> Result<Store, RepositoryError>;
    async fn update(&self, id: Uuid, req: &StoreRequest)
    -> Result<Option<Store>, RepositoryError>;
    async fn soft_delete(
        &self,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<Option<Store>, RepositoryError>;
}

#[async_trait]
pub trait StoreQueryServiceTrait {
    async fn search(
        &self,
        req: &SearchStores,
    ) -> Result<ApiResponsePagination<Vec<StoreResponse>>, ServiceError>;
}

#[async_trait]
pub trait StoreCommandServiceTrait {
    async fn create(&self, req: &StoreRequest) -> Result<ApiResponse<StoreResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        req: &StoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
    async fn delete(
        &self,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
}
