use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    model::{Order, OrderAggregate, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};
use uuid::Uuid;

const ORDER_RETURNING: &str = "order_id, user_id, store_id, order_type, status, \
                               address, request_notes, created_at, updated_at, deleted_at";

const ITEM_RETURNING: &str =
    "order_item_id, order_id, menu_id, quantity, price, created_at, updated_at";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn insert_item_tx(
        tx: &mut Transaction<'_, Postgres>,
        item: &OrderItem,
    ) -> Result<OrderItem, RepositoryError> {
        let inserted = sqlx::query_as::<_, OrderItem>(&format!(
            r#"
            INSERT INTO p_order_items
                (order_item_id, order_id, menu_id, quantity, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING {ITEM_RETURNING}
            "#
        ))
        .bind(item.order_item_id)
        .bind(item.order_id)
        .bind(item.menu_id)
        .bind(item.quantity)
        .bind(item.price)
        .fetch_one(&mut **tx)
        .await
        .map_err(RepositoryError::from)?;

        Ok(inserted)
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create(&self, aggregate: &OrderAggregate) -> Result<OrderAggregate, RepositoryError> {
        let order = &aggregate.order;

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let persisted_order = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO p_orders
                (order_id, user_id, store_id, order_type, status, address, request_notes,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, current_timestamp, current_timestamp)
            RETURNING {ORDER_RETURNING}
            "#
        ))
        .bind(order.order_id)
        .bind(order.user_id)
        .bind(order.store_id)
        .bind(order.order_type)
        .bind(order.status)
        .bind(&order.address)
        .bind(&order.request_notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for user {}: {err:?}",
                order.user_id
            );
            RepositoryError::from(err)
        })?;

        let mut persisted_items = Vec::with_capacity(aggregate.items.len());
        for item in &aggregate.items {
            persisted_items.push(Self::insert_item_tx(&mut tx, item).await?);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order {} with {} item(s) for user {}",
            persisted_order.order_id,
            persisted_items.len(),
            persisted_order.user_id
        );

        Ok(OrderAggregate {
            order: persisted_order,
            items: persisted_items,
        })
    }

    async fn insert_item(&self, item: &OrderItem) -> Result<OrderItem, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;
        let inserted = Self::insert_item_tx(&mut tx, item).await.map_err(|e| {
            error!(
                "❌ Failed to add item to order {}: {e:?}",
                item.order_id
            );
            e
        })?;
        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Added item {} to order {}", inserted.order_item_id, inserted.order_id);
        Ok(inserted)
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE p_orders
            SET status     = $2,
                updated_at = current_timestamp
            WHERE order_id = $1
            RETURNING {ORDER_RETURNING}
            "#
        ))
        .bind(order_id)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status of order {order_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if order.is_some() {
            info!("🔄 Order {order_id} moved to {status}");
        }
        Ok(order)
    }
}
