use super::{default_page, default_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateAiLogRequest {
    #[validate(length(min = 1))]
    pub req_text: String,

    #[validate(length(min = 1))]
    pub resp_text: String,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, Clone)]
pub struct SearchAiLogs {
    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_size")]
    pub size: i64,
}
