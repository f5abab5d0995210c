use crate::model::Menu;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MenuResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub price: i32,
    pub photo_url: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Menu> for MenuResponse {
    fn from(value: Menu) -> Self {
        MenuResponse {
            id: value.menu_id,
            store_id: value.store_id,
            category_id: value.category_id,
            name: value.name,
            price: value.price,
            photo_url: value.photo_url,
            description: value.description,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
