use crate::{
    domain::{
        requests::{CategoryRequest, SearchCategories},
        response::CategoryResponse,
    },
    model::Category,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{RepositoryError, ServiceError},
    query::PageRequest,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;
pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;
pub type DynCategoryQueryService = Arc<dyn CategoryQueryServiceTrait + Send + Sync>;
pub type DynCategoryCommandService = Arc<dyn CategoryCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn search(
        &self,
        req: &SearchCategories,
        page: &PageRequest,
    ) -> Result<(Vec<Category>, i64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;
}

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create(&self, req: &CategoryRequest) -> Result<Category, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &CategoryRequest,
    ) -> Result<Option<Category>, RepositoryError>;
    async fn soft_delete(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;
}

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn search(
        &self,
        req: &SearchCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError>;
}

#[async_trait]
pub trait CategoryCommandServiceTrait {
    async fn create(
        &self,
        req: &CategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        req: &CategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
}
