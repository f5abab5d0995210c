use crate::{
    abstract_trait::{DynStoreQueryRepository, StoreQueryServiceTrait},
    domain::{requests::SearchStores, response::StoreResponse},
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponsePagination, Pagination},
    errors::ServiceError,
    query::PageRequest,
};
use tracing::info;

pub struct StoreQueryService {
    repository: DynStoreQueryRepository,
}

impl StoreQueryService {
    pub fn new(repository: DynStoreQueryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl StoreQueryServiceTrait for StoreQueryService {
    async fn search(
        &self,
        req: &SearchStores,
    ) -> Result<ApiResponsePagination<Vec<StoreResponse>>, ServiceError> {
        let page = PageRequest::new(req.page, req.size)?;

        let (stores, total) = self.repository.search(req, &page).await?;

        info!("✅ Found {total} store(s)");

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Stores retrieved successfully".to_string(),
            data: stores.into_iter().map(StoreResponse::from).collect(),
            pagination: Pagination::new(page.page(), page.size(), total),
        })
    }
}
