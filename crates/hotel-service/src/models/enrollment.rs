//! 报名与门票实体
//!
//! Enrollment（报名）-> Ticket（门票）-> TicketType（门票类型）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::TicketStatus;

/// 用户的活动报名记录，每个用户至多一条
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 门票（挂在报名记录下）
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 门票类型
///
/// `is_remote` 与 `includes_hotel` 相互独立，线下且含酒店的门票才能查看酒店
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
