use crate::{
    abstract_trait::{CategoryQueryServiceTrait, DynCategoryQueryRepository},
    domain::{requests::SearchCategories, response::CategoryResponse},
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponsePagination, Pagination},
    errors::ServiceError,
    query::PageRequest,
};
use tracing::info;

pub struct CategoryQueryService {
    repository: DynCategoryQueryRepository,
}

impl CategoryQueryService {
    pub fn new(repository: DynCategoryQueryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn search(
        &self,
        req: &SearchCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError> {
        let page = PageRequest::new(req.page, req.size)?;

        let (categories, total) = self.repository.search(req, &page).await?;

        info!("✅ Found {total} categories");

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Categories retrieved successfully".to_string(),
            data: categories.into_iter().map(CategoryResponse::from).collect(),
            pagination: Pagination::new(page.page(), page.size(), total),
        })
    }
}
