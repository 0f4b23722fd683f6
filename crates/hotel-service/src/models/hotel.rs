//! 酒店与房间实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 酒店
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    /// 酒店图片 URL
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 房间，属于唯一一家酒店
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i32,
    pub name: String,
    /// 可入住人数
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 酒店详情（含房间列表）
///
/// 序列化时酒店字段平铺，房间列表字段名为 `Rooms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}
