use super::{default_page, default_size};
use crate::model::{OrderStatus, OrderType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderRequest {
    pub store_id: Uuid,

    pub order_type: OrderType,

    #[validate(length(min = 1, max = 500))]
    pub address: String,

    #[validate(length(max = 1000))]
    pub request_notes: Option<String>,

    #[validate(length(min = 1), nested)]
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderItemRequest {
    pub menu_id: Uuid,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, Clone)]
pub struct SearchOrders {
    pub user_id: Option<Uuid>,

    pub store_id: Option<Uuid>,

    pub status: Option<OrderStatus>,

    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_size")]
    pub size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(items: Vec<CreateOrderItemRequest>, address: &str) -> CreateOrderRequest {
        CreateOrderRequest {
            store_id: Uuid::new_v4(),
            order_type: OrderType::Delivery,
            address: address.to_string(),
            request_notes: None,
            items,
        }
    }

    fn item(quantity: i32) -> CreateOrderItemRequest {
        CreateOrderItemRequest {
            menu_id: Uuid::new_v4(),
            quantity,
        }
    }

    #[test]
    fn a_well_formed_create_request_passes() {
        assert!(request(vec![item(2)], "123 Main St").validate().is_ok());
    }

    #[test]
    fn empty_item_list_is_rejected() {
        assert!(request(vec![], "123 Main St").validate().is_err());
    }

    #[test]
    fn empty_address_is_rejected() {
        assert!(request(vec![item(1)], "").validate().is_err());
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        assert!(request(vec![item(0)], "123 Main St").validate().is_err());
    }

    #[test]
    fn status_filter_deserializes_from_wire_names() {
        let req: SearchOrders =
            serde_json::from_str(r#"{"status": "IN_PROGRESS", "page": 2, "size": 20}"#).unwrap();
        assert_eq!(req.status, Some(OrderStatus::InProgress));
        assert_eq!(req.page, 2);
        assert_eq!(req.size, 20);
    }

    #[test]
    fn page_window_defaults_apply_when_absent() {
        let req: SearchOrders = serde_json::from_str("{}").unwrap();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, 10);
        assert!(req.status.is_none());
    }
}
