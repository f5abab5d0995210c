use crate::{
    abstract_trait::{DynMenuQueryRepository, DynStoreQueryRepository, MenuQueryServiceTrait},
    domain::{requests::SearchMenus, response::MenuResponse},
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponsePagination, Pagination},
    errors::ServiceError,
    query::PageRequest,
};
use tracing::info;
use uuid::Uuid;

pub struct MenuQueryService {
    store_query: DynStoreQueryRepository,
    repository: DynMenuQueryRepository,
}

impl MenuQueryService {
    pub fn new(store_query: DynStoreQueryRepository, repository: DynMenuQueryRepository) -> Self {
        Self {
            store_query,
            repository,
        }
    }
}

#[async_trait]
impl MenuQueryServiceTrait for MenuQueryService {
    async fn search_by_store(
        &self,
        store_id: Uuid,
        req: &SearchMenus,
    ) -> Result<ApiResponsePagination<Vec<MenuResponse>>, ServiceError> {
        let page = PageRequest::new(req.page, req.size)?;

        self.store_query
            .find_by_id(store_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Store".to_string()))?;

        let (menus, total) = self.repository.search_by_store(store_id, req, &page).await?;

        info!("✅ Found {total} menu(s) for store {store_id}");

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Menus retrieved successfully".to_string(),
            data: menus.into_iter().map(MenuResponse::from).collect(),
            pagination: Pagination::new(page.page(), page.size(), total),
        })
    }
}
