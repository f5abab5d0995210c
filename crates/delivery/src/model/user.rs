use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::model::Role;
use sqlx::FromRow;
use uuid::Uuid;

/// Referenced for existence checks only; account management lives in the
/// identity service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}
