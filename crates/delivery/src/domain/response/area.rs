use crate::model::Area;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AreaResponse {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Area> for AreaResponse {
    fn from(value: Area) -> Self {
        AreaResponse {
            id: value.area_id,
            name: value.name,
            city: value.city,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
