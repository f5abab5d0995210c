use crate::{
    abstract_trait::{AreaQueryServiceTrait, DynAreaQueryRepository},
    domain::{requests::SearchAreas, response::AreaResponse},
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponsePagination, Pagination},
    errors::ServiceError,
    query::PageRequest,
};
use tracing::info;

pub struct AreaQueryService {
    repository: DynAreaQueryRepository,
}

impl AreaQueryService {
    pub fn new(repository: DynAreaQueryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AreaQueryServiceTrait for AreaQueryService {
    async fn search(
        &self,
        req: &SearchAreas,
    ) -> Result<ApiResponsePagination<Vec<AreaResponse>>, ServiceError> {
        let page = PageRequest::new(req.page, req.size)?;

        let (areas, total) = self.repository.search(req, &page).await?;

        info!("✅ Found {total} area(s)");

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Areas retrieved successfully".to_string(),
            data: areas.into_iter().map(AreaResponse::from).collect(),
            pagination: Pagination::new(page.page(), page.size(), total),
        })
    }
}
