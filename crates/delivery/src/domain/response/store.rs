use crate::model::Store;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StoreResponse {
    pub id: Uuid,
    pub store_name: String,
    pub owner_id: Uuid,
    pub area_id: Uuid,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Store> for StoreResponse {
    fn from(value: Store) -> Self {
        StoreResponse {
            id: value.store_id,
            store_name: value.store_name,
            owner_id: value.owner_id,
            area_id: value.area_id,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
