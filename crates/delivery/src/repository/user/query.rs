use crate::{abstract_trait::UserQueryRepositoryTrait, model::User};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, role, created_at, updated_at, deleted_at
            FROM p_users
            WHERE user_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
