use crate::{
    domain::{
        requests::{CreateOrderItemRequest, CreateOrderRequest, SearchOrders},
        response::OrderResponse,
    },
    model::{Order, OrderAggregate, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::{RepositoryError, ServiceError},
    query::PageRequest,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn search(
        &self,
        req: &SearchOrders,
        page: &PageRequest,
    ) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError>;
    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persists the order row and all of its items in one transaction.
    async fn create(&self, aggregate: &OrderAggregate) -> Result<OrderAggregate, RepositoryError>;
    async fn insert_item(&self, item: &OrderItem) -> Result<OrderItem, RepositoryError>;
    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn search(
        &self,
        req: &SearchOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn add_item(
        &self,
        order_id: Uuid,
        req: &CreateOrderItemRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn cancel(&self, order_id: Uuid) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
