use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::errors::DomainError;
use sqlx::{
    Decode, Encode, FromRow, Postgres, Type,
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_ADDRESS_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Accepted,
    InProgress,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Edge table of the status machine. Forward edges only; a same-status
    /// "transition" is handled by the aggregate as a no-op, not an edge.
    pub fn can_advance_to(self, target: OrderStatus) -> bool {
        match (self, target) {
            (OrderStatus::Placed, OrderStatus::Accepted)
            | (OrderStatus::Accepted, OrderStatus::InProgress)
            | (OrderStatus::InProgress, OrderStatus::Delivered) => true,
            (from, OrderStatus::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLACED" => Ok(OrderStatus::Placed),
            "ACCEPTED" => Ok(OrderStatus::Accepted),
            "IN_PROGRESS" => Ok(OrderStatus::InProgress),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::InvalidArgument(format!(
                "unknown order status: {other}"
            ))),
        }
    }
}

impl Type<Postgres> for OrderStatus {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for OrderStatus {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for OrderStatus {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let s = <&str as Decode<Postgres>>::decode(value)?;
        Ok(s.parse::<OrderStatus>()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Delivery,
    Pickup,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Delivery => "DELIVERY",
            OrderType::Pickup => "PICKUP",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DELIVERY" => Ok(OrderType::Delivery),
            "PICKUP" => Ok(OrderType::Pickup),
            other => Err(DomainError::InvalidArgument(format!(
                "unknown order type: {other}"
            ))),
        }
    }
}

impl Type<Postgres> for OrderType {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for OrderType {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for OrderType {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let s = <&str as Decode<Postgres>>::decode(value)?;
        Ok(s.parse::<OrderType>()?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub store_id: Uuid,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub address: String,
    pub request_notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: Uuid,
    pub order_id: Uuid,
    pub menu_id: Uuid,
    pub quantity: i32,
    pub price: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// A line item before it is attached to an order; price is the menu price
/// snapshotted by the service at the time the item is added.
#[derive(Debug, Clone, Copy)]
pub struct ItemDraft {
    pub menu_id: Uuid,
    pub quantity: i32,
    pub price: i32,
}

/// The order plus its line items as one consistency unit.
///
/// All mutation goes through [`OrderAggregate::add_item`] and
/// [`OrderAggregate::transition_to`]; there is no direct status setter, so
/// the item list and status can never disagree with the rules below:
/// status is always a known enum value, the item list is non-empty from
/// creation on, and items are only added while the order is still PLACED.
#[derive(Debug, Clone)]
pub struct OrderAggregate {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl OrderAggregate {
    pub fn place(
        user_id: Uuid,
        store_id: Uuid,
        order_type: OrderType,
        address: &str,
        request_notes: Option<String>,
        items: Vec<ItemDraft>,
    ) -> Result<Self, DomainError> {
        if address.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "delivery address must not be blank".into(),
            ));
        }
        if address.len() > MAX_ADDRESS_LEN {
            return Err(DomainError::InvalidArgument(format!(
                "delivery address must not exceed {MAX_ADDRESS_LEN} characters"
            )));
        }
        if items.is_empty() {
            return Err(DomainError::InvalidArgument(
                "order must contain at least one item".into(),
            ));
        }

        let order_id = Uuid::new_v4();
        let items = items
            .into_iter()
            .map(|draft| Self::item_from_draft(order_id, draft))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            order: Order {
                order_id,
                user_id,
                store_id,
                order_type,
                status: OrderStatus::Placed,
                address: address.to_string(),
                request_notes,
                created_at: None,
                updated_at: None,
                deleted_at: None,
            },
            items,
        })
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<OrderItem, DomainError> {
        if self.order.status != OrderStatus::Placed {
            return Err(DomainError::InvalidState(format!(
                "items can only be added while the order is PLACED, current status is {}",
                self.order.status
            )));
        }

        let item = Self::item_from_draft(self.order.order_id, draft)?;
        self.items.push(item.clone());
        Ok(item)
    }

    /// Returns `Ok(true)` when the status changed, `Ok(false)` for a
    /// same-status request (idempotent no-op).
    pub fn transition_to(&mut self, target: OrderStatus) -> Result<bool, DomainError> {
        let current = self.order.status;

        if current == target {
            return Ok(false);
        }
        if !current.can_advance_to(target) {
            return Err(DomainError::InvalidTransition {
                from: current.to_string(),
                to: target.to_string(),
            });
        }

        self.order.status = target;
        Ok(true)
    }

    pub fn cancel(&mut self) -> Result<bool, DomainError> {
        self.transition_to(OrderStatus::Cancelled)
    }

    fn item_from_draft(order_id: Uuid, draft: ItemDraft) -> Result<OrderItem, DomainError> {
        if draft.quantity <= 0 {
            return Err(DomainError::InvalidArgument(format!(
                "item quantity must be positive, got {}",
                draft.quantity
            )));
        }

        Ok(OrderItem {
            order_item_id: Uuid::new_v4(),
            order_id,
            menu_id: draft.menu_id,
            quantity: draft.quantity,
            price: draft.price,
            created_at: None,
            updated_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(quantity: i32) -> ItemDraft {
        ItemDraft {
            menu_id: Uuid::new_v4(),
            quantity,
            price: 12_000,
        }
    }

    fn placed_order() -> OrderAggregate {
        OrderAggregate::place(
            Uuid::new_v4(),
            Uuid::new_v4(),
            OrderType::Delivery,
            "123 Main St",
            None,
            vec![draft(2)],
        )
        .unwrap()
    }

    #[test]
    fn place_starts_at_placed_with_items() {
        let aggregate = placed_order();
        assert_eq!(aggregate.order.status, OrderStatus::Placed);
        assert_eq!(aggregate.items.len(), 1);
        assert_eq!(aggregate.items[0].quantity, 2);
        assert_eq!(aggregate.items[0].order_id, aggregate.order.order_id);
    }

    #[test]
    fn place_rejects_empty_item_list() {
        let result = OrderAggregate::place(
            Uuid::new_v4(),
            Uuid::new_v4(),
            OrderType::Delivery,
            "123 Main St",
            None,
            vec![],
        );
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn place_rejects_blank_address() {
        let result = OrderAggregate::place(
            Uuid::new_v4(),
            Uuid::new_v4(),
            OrderType::Pickup,
            "   ",
            None,
            vec![draft(1)],
        );
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn place_rejects_oversized_address() {
        let long_address = "x".repeat(MAX_ADDRESS_LEN + 1);
        let result = OrderAggregate::place(
            Uuid::new_v4(),
            Uuid::new_v4(),
            OrderType::Delivery,
            &long_address,
            None,
            vec![draft(1)],
        );
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn place_rejects_non_positive_quantity() {
        let result = OrderAggregate::place(
            Uuid::new_v4(),
            Uuid::new_v4(),
            OrderType::Delivery,
            "123 Main St",
            None,
            vec![draft(0)],
        );
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn add_item_works_while_placed() {
        let mut aggregate = placed_order();
        let item = aggregate.add_item(draft(3)).unwrap();
        assert_eq!(aggregate.items.len(), 2);
        assert_eq!(item.order_id, aggregate.order.order_id);
        assert!(aggregate.items.iter().any(|i| i.order_item_id == item.order_item_id));
    }

    #[test]
    fn add_item_fails_once_accepted() {
        let mut aggregate = placed_order();
        aggregate.transition_to(OrderStatus::Accepted).unwrap();

        let result = aggregate.add_item(draft(1));
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
        assert_eq!(aggregate.items.len(), 1);
    }

    #[test]
    fn add_item_fails_in_terminal_states() {
        let mut aggregate = placed_order();
        aggregate.cancel().unwrap();
        assert!(matches!(
            aggregate.add_item(draft(1)),
            Err(DomainError::InvalidState(_))
        ));
    }

    #[test]
    fn happy_path_runs_in_sequence() {
        let mut aggregate = placed_order();
        assert!(aggregate.transition_to(OrderStatus::Accepted).unwrap());
        assert!(aggregate.transition_to(OrderStatus::InProgress).unwrap());
        assert!(aggregate.transition_to(OrderStatus::Delivered).unwrap());
        assert_eq!(aggregate.order.status, OrderStatus::Delivered);
    }

    #[test]
    fn skipping_ahead_is_rejected() {
        let mut aggregate = placed_order();
        let result = aggregate.transition_to(OrderStatus::Delivered);
        assert_eq!(
            result,
            Err(DomainError::InvalidTransition {
                from: "PLACED".into(),
                to: "DELIVERED".into(),
            })
        );
        assert_eq!(aggregate.order.status, OrderStatus::Placed);
    }

    #[test]
    fn moving_backwards_is_rejected() {
        let mut aggregate = placed_order();
        aggregate.transition_to(OrderStatus::Accepted).unwrap();
        assert!(aggregate.transition_to(OrderStatus::Placed).is_err());
    }

    #[test]
    fn cancel_allowed_from_any_non_terminal_status() {
        for advance in [0, 1, 2] {
            let mut aggregate = placed_order();
            let steps = [OrderStatus::Accepted, OrderStatus::InProgress];
            for status in steps.iter().take(advance) {
                aggregate.transition_to(*status).unwrap();
            }
            assert!(aggregate.cancel().unwrap());
            assert_eq!(aggregate.order.status, OrderStatus::Cancelled);
        }
    }

    #[test]
    fn cancel_rejected_from_terminal_statuses() {
        let mut delivered = placed_order();
        delivered.transition_to(OrderStatus::Accepted).unwrap();
        delivered.transition_to(OrderStatus::InProgress).unwrap();
        delivered.transition_to(OrderStatus::Delivered).unwrap();
        assert!(delivered.cancel().is_err());

        let mut cancelled = placed_order();
        cancelled.cancel().unwrap();
        assert!(matches!(
            cancelled.transition_to(OrderStatus::Cancelled),
            Ok(false)
        ));
    }

    #[test]
    fn same_status_transition_is_a_noop() {
        let mut aggregate = placed_order();
        assert!(!aggregate.transition_to(OrderStatus::Placed).unwrap());
        aggregate.transition_to(OrderStatus::Accepted).unwrap();
        assert!(!aggregate.transition_to(OrderStatus::Accepted).unwrap());
        assert_eq!(aggregate.order.status, OrderStatus::Accepted);
    }

    #[test]
    fn accepted_then_cancelled_then_no_way_back() {
        let mut aggregate = placed_order();

        assert!(aggregate.transition_to(OrderStatus::Accepted).unwrap());
        assert_eq!(aggregate.order.status, OrderStatus::Accepted);

        assert!(aggregate.transition_to(OrderStatus::Cancelled).unwrap());
        assert_eq!(aggregate.order.status, OrderStatus::Cancelled);

        assert_eq!(
            aggregate.transition_to(OrderStatus::Accepted),
            Err(DomainError::InvalidTransition {
                from: "CANCELLED".into(),
                to: "ACCEPTED".into(),
            })
        );
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::Accepted,
            OrderStatus::InProgress,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("SHIPPED".parse::<OrderStatus>().is_err());
    }
}
