//! 报名仓储

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::EnrollmentRepositoryTrait;
use crate::error::Result;
use crate::models::Enrollment;

pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepositoryTrait for EnrollmentRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT id,
                   "userId" AS user_id,
                   "createdAt" AT TIME ZONE 'UTC' AS created_at,
                   "updatedAt" AT TIME ZONE 'UTC' AS updated_at
            FROM "Enrollment"
            WHERE "userId" = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(enrollment)
    }
}
