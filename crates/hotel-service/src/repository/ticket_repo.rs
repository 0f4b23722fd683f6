//! 门票仓储
//!
//! 门票及门票类型的数据访问

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::TicketRepositoryTrait;
use crate::error::Result;
use crate::models::{Ticket, TicketType};

pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepositoryTrait for TicketRepository {
    /// 报名下的门票（每个报名至多一张）
    async fn find_ticket_by_enrollment_id(&self, enrollment_id: i32) -> Result<Option<Ticket>> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id,
                   "ticketTypeId" AS ticket_type_id,
                   "enrollmentId" AS enrollment_id,
                   status,
                   "createdAt" AT TIME ZONE 'UTC' AS created_at,
                   "updatedAt" AT TIME ZONE 'UTC' AS updated_at
            FROM "Ticket"
            WHERE "enrollmentId" = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }

    async fn find_ticket_type(&self, ticket_type_id: i32) -> Result<Option<TicketType>> {
        let ticket_type = sqlx::query_as::<_, TicketType>(
            r#"
            SELECT id,
                   name,
                   price,
                   "isRemote" AS is_remote,
                   "includesHotel" AS includes_hotel,
                   "createdAt" AT TIME ZONE 'UTC' AS created_at,
                   "updatedAt" AT TIME ZONE 'UTC' AS updated_at
            FROM "TicketType"
            WHERE id = $1
            "#,
        )
        .bind(ticket_type_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket_type)
    }
}
