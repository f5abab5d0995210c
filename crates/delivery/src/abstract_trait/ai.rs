use crate::{
    domain::{
        requests::{CreateAiLogRequest, SearchAiLogs},
        response::AiLogResponse,
    },
    model::AiLog,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{RepositoryError, ServiceError},
    query::PageRequest,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynAiLogQueryRepository = Arc<dyn AiLogQueryRepositoryTrait + Send + Sync>;
pub type DynAiLogCommandRepository = Arc<dyn AiLogCommandRepositoryTrait + Send + Sync>;
pub type DynAiLogQueryService = Arc<dyn AiLogQueryServiceTrait + Send + Sync>;
pub type DynAiLogCommandService = Arc<dyn AiLogCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait AiLogQueryRepositoryTrait {
    async fn find_all(&self, page: &PageRequest) -> Result<(Vec<AiLog>, i64), RepositoryError>;
}

#[async_trait]
pub trait AiLogCommandRepositoryTrait {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateAiLogRequest,
    ) -> Result<AiLog, RepositoryError>;
}

#[async_trait]
pub trait AiLogQueryServiceTrait {
    async fn find_all(
        &self,
        req: &SearchAiLogs,
    ) -> Result<ApiResponsePagination<Vec<AiLogResponse>>, ServiceError>;
}

#[async_trait]
pub trait AiLogCommandServiceTrait {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateAiLogRequest,
    ) -> Result<ApiResponse<AiLogResponse>, ServiceError>;
}
