use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    domain::requests::SearchOrders,
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    query::{PageRequest, Predicate, SearchQuery},
};
use tracing::{error, info};
use uuid::Uuid;

const ORDER_COLUMNS: &str = "o.order_id, o.user_id, o.store_id, o.order_type, o.status, \
                             o.address, o.request_notes, o.created_at, o.updated_at, o.deleted_at";

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn search(
        &self,
        req: &SearchOrders,
        page: &PageRequest,
    ) -> Result<(Vec<Order>, i64), RepositoryError> {
        info!(
            "🔍 Searching orders: user={:?} store={:?} status={:?}",
            req.user_id, req.store_id, req.status
        );

        let plan = SearchQuery::over("p_orders", "o", "order_id")
            .filter(Predicate::id_eq("o.user_id", req.user_id))
            .filter(Predicate::id_eq("o.store_id", req.store_id))
            .filter(Predicate::text_eq(
                "o.status",
                req.status.map(|s| s.as_str()),
            ));

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut select = plan.select(ORDER_COLUMNS, page);
        let orders = select
            .build_query_as::<Order>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to search orders: {e:?}");
                RepositoryError::from(e)
            })?;

        let mut count = plan.count();
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok((orders, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, user_id, store_id, order_type, status,
                   address, request_notes, created_at, updated_at, deleted_at
            FROM p_orders
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_item_id, order_id, menu_id, quantity, price, created_at, updated_at
            FROM p_order_items
            WHERE order_id = $1
            ORDER BY created_at, order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items of order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
