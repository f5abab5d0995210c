use super::{default_page, default_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Optional filters for the area search; absent (or blank) fields add no
/// constraint.
#[derive(Debug, Serialize, Deserialize, IntoParams, Clone)]
pub struct SearchAreas {
    pub city: Option<String>,

    pub area_id: Option<Uuid>,

    pub area_name: Option<String>,

    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_size")]
    pub size: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct AreaRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,
}
