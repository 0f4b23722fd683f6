//! 会话仓储

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::SessionRepositoryTrait;
use crate::error::Result;
use crate::models::Session;

pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepositoryTrait for SessionRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT id,
                   "userId" AS user_id,
                   token,
                   "createdAt" AT TIME ZONE 'UTC' AS created_at,
                   "updatedAt" AT TIME ZONE 'UTC' AS updated_at
            FROM "Session"
            WHERE token = $1
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }
}
