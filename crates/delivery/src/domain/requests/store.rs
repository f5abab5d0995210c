use super::{default_page, default_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Store search filters. `area_name`/`area_id` reach through the store-area
/// relation; the engine pulls the join in only when one of them is present.
#[derive(Debug, Serialize, Deserialize, IntoParams, Clone)]
pub struct SearchStores {
    pub store_name: Option<String>,

    pub store_id: Option<Uuid>,

    pub area_name: Option<String>,

    pub area_id: Option<Uuid>,

    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_size")]
    pub size: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct StoreRequest {
    #[validate(length(min = 1, max = 200))]
    pub store_name: String,

    pub owner_id: Uuid,

    pub area_id: Uuid,

    #[validate(length(min = 1))]
    pub category_ids: Vec<Uuid>,
}
