use super::{default_page, default_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, IntoParams, Clone)]
pub struct SearchMenus {
    pub name: Option<String>,

    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_size")]
    pub size: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct MenuRequest {
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(range(min = 1))]
    pub price: i32,

    #[validate(url)]
    pub photo_url: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}
