use crate::model::{Order, OrderAggregate, OrderItem, OrderStatus, OrderType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub store_id: Uuid,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub address: String,
    pub request_notes: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub quantity: i32,
    pub price: i32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.order_item_id,
            menu_id: value.menu_id,
            quantity: value.quantity,
            price: value.price,
        }
    }
}

impl From<OrderAggregate> for OrderResponse {
    fn from(value: OrderAggregate) -> Self {
        let OrderAggregate { order, items } = value;
        let items = items.into_iter().map(OrderItemResponse::from).collect();
        OrderResponse::from_parts(order, items)
    }
}

impl OrderResponse {
    fn from_parts(order: Order, items: Vec<OrderItemResponse>) -> Self {
        OrderResponse {
            id: order.order_id,
            user_id: order.user_id,
            store_id: order.store_id,
            order_type: order.order_type,
            status: order.status,
            address: order.address,
            request_notes: order.request_notes,
            items,
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }

    /// Listing rows come without their items; the detail endpoint loads the
    /// full aggregate.
    pub fn summary(order: Order) -> Self {
        Self::from_parts(order, Vec::new())
    }
}
