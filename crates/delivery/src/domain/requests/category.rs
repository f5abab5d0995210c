use super::{default_page, default_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, IntoParams, Clone)]
pub struct SearchCategories {
    pub name: Option<String>,

    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_size")]
    pub size: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
