use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{requests::SearchOrders, response::OrderResponse},
    model::OrderAggregate,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination},
    errors::ServiceError,
    query::PageRequest,
};
use tracing::info;
use uuid::Uuid;

pub struct OrderQueryService {
    repository: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(repository: DynOrderQueryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn search(
        &self,
        req: &SearchOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let page = PageRequest::new(req.page, req.size)?;

        let (orders, total) = self.repository.search(req, &page).await?;

        info!("✅ Found {total} order(s)");

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Orders retrieved successfully".to_string(),
            data: orders.into_iter().map(OrderResponse::summary).collect(),
            pagination: Pagination::new(page.page(), page.size(), total),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order".to_string()))?;

        let items = self.repository.find_items(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order retrieved successfully".to_string(),
            data: OrderResponse::from(OrderAggregate { order, items }),
        })
    }
}
