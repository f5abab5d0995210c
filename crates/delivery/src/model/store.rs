use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Store {
    pub store_id: Uuid,
    pub store_name: String,
    pub owner_id: Uuid,
    pub area_id: Uuid,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
    pub deleted_by: Option<Uuid>,
}

/// Link row between a store and one of its categories.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoreCategory {
    pub id: i64,
    pub store_id: Uuid,
    pub category_id: Uuid,
}
