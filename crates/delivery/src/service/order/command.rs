use crate::{
    abstract_trait::{
        DynMenuQueryRepository, DynOrderCommandRepository, DynOrderQueryRepository,
        DynStoreQueryRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderItemRequest, CreateOrderRequest},
        response::OrderResponse,
    },
    model::{ItemDraft, Menu, OrderAggregate, OrderStatus},
};
use async_trait::async_trait;
use shared::{
    domain::responses::ApiResponse,
    errors::{DomainError, ServiceError},
};
use tracing::{error, info};
use uuid::Uuid;

pub struct OrderCommandService {
    store_query: DynStoreQueryRepository,
    menu_query: DynMenuQueryRepository,
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
}

pub struct OrderCommandServiceDeps {
    pub store_query: DynStoreQueryRepository,
    pub menu_query: DynMenuQueryRepository,
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            store_query,
            menu_query,
            query,
            command,
        } = deps;

        Self {
            store_query,
            menu_query,
            query,
            command,
        }
    }

    async fn load_aggregate(&self, order_id: Uuid) -> Result<OrderAggregate, ServiceError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order".to_string()))?;

        let items = self.query.find_items(order_id).await?;

        Ok(OrderAggregate { order, items })
    }

    /// Resolves the menu and snapshots its current price into a draft item.
    async fn draft_from_menu(
        &self,
        store_id: Uuid,
        menu_id: Uuid,
        quantity: i32,
    ) -> Result<ItemDraft, ServiceError> {
        let menu: Menu = self.menu_query.find_by_id(menu_id).await?.ok_or_else(|| {
            error!("❌ Menu {menu_id} not found");
            ServiceError::NotFound("Menu".to_string())
        })?;

        if menu.store_id != store_id {
            return Err(ServiceError::Domain(DomainError::InvalidArgument(format!(
                "menu {menu_id} does not belong to store {store_id}"
            ))));
        }

        Ok(ItemDraft {
            menu_id: menu.menu_id,
            quantity,
            price: menu.price,
        })
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create(
        &self,
        user_id: Uuid,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🏗️ Creating order for user {user_id} at store {}", req.store_id);

        let store = self
            .store_query
            .find_by_id(req.store_id)
            .await?
            .ok_or_else(|| {
                error!("❌ Store {} not found", req.store_id);
                ServiceError::NotFound("Store".to_string())
            })?;

        let mut drafts = Vec::with_capacity(req.items.len());
        for item in &req.items {
            drafts.push(
                self.draft_from_menu(store.store_id, item.menu_id, item.quantity)
                    .await?,
            );
        }

        let aggregate = OrderAggregate::place(
            user_id,
            store.store_id,
            req.order_type,
            &req.address,
            req.request_notes.clone(),
            drafts,
        )?;

        let persisted = self.command.create(&aggregate).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order placed successfully".to_string(),
            data: OrderResponse::from(persisted),
        })
    }

    async fn add_item(
        &self,
        order_id: Uuid,
        req: &CreateOrderItemRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let mut aggregate = self.load_aggregate(order_id).await?;

        let draft = self
            .draft_from_menu(aggregate.order.store_id, req.menu_id, req.quantity)
            .await?;

        let item = aggregate.add_item(draft)?;
        self.command.insert_item(&item).await?;

        let items = self.query.find_items(order_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Item added to order".to_string(),
            data: OrderResponse::from(OrderAggregate {
                order: aggregate.order,
                items,
            }),
        })
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let mut aggregate = self.load_aggregate(order_id).await?;

        let changed = aggregate.transition_to(status)?;

        let order = if changed {
            self.command
                .update_status(order_id, status)
                .await?
                .ok_or_else(|| ServiceError::NotFound("Order".to_string()))?
        } else {
            info!("🔁 Order {order_id} is already {status}, nothing to do");
            aggregate.order
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: format!("Order status is now {status}"),
            data: OrderResponse::from(OrderAggregate {
                order,
                items: aggregate.items,
            }),
        })
    }

    async fn cancel(&self, order_id: Uuid) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🛑 Cancelling order {order_id}");
        self.update_status(order_id, OrderStatus::Cancelled).await
    }
}
