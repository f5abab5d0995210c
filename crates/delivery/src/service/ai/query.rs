use crate::{
    abstract_trait::{AiLogQueryServiceTrait, DynAiLogQueryRepository},
    domain::{requests::SearchAiLogs, response::AiLogResponse},
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponsePagination, Pagination},
    errors::ServiceError,
    query::PageRequest,
};
use tracing::info;

pub struct AiLogQueryService {
    repository: DynAiLogQueryRepository,
}

impl AiLogQueryService {
    pub fn new(repository: DynAiLogQueryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AiLogQueryServiceTrait for AiLogQueryService {
    async fn find_all(
        &self,
        req: &SearchAiLogs,
    ) -> Result<ApiResponsePagination<Vec<AiLogResponse>>, ServiceError> {
        let page = PageRequest::new(req.page, req.size)?;

        let (logs, total) = self.repository.find_all(&page).await?;

        info!("✅ Found {total} AI log(s)");

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "AI logs retrieved successfully".to_string(),
            data: logs.into_iter().map(AiLogResponse::from).collect(),
            pagination: Pagination::new(page.page(), page.size(), total),
        })
    }
}
