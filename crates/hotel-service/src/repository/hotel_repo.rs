//! 酒店仓储
//!
//! 酒店列表与单个酒店（含房间）的数据访问

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::HotelRepositoryTrait;
use crate::error::Result;
use crate::models::{Hotel, HotelWithRooms, Room};

pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list_rooms(&self, hotel_id: i32) -> Result<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id,
                   name,
                   capacity,
                   "hotelId" AS hotel_id,
                   "createdAt" AT TIME ZONE 'UTC' AS created_at,
                   "updatedAt" AT TIME ZONE 'UTC' AS updated_at
            FROM "Room"
            WHERE "hotelId" = $1
            ORDER BY id ASC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }
}

#[async_trait]
impl HotelRepositoryTrait for HotelRepository {
    async fn list_hotels(&self) -> Result<Vec<Hotel>> {
        let hotels = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id,
                   name,
                   image,
                   "createdAt" AT TIME ZONE 'UTC' AS created_at,
                   "updatedAt" AT TIME ZONE 'UTC' AS updated_at
            FROM "Hotel"
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(hotels)
    }

    async fn find_hotel_with_rooms(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>> {
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id,
                   name,
                   image,
                   "createdAt" AT TIME ZONE 'UTC' AS created_at,
                   "updatedAt" AT TIME ZONE 'UTC' AS updated_at
            FROM "Hotel"
            WHERE id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = self.list_rooms(hotel.id).await?;
        Ok(Some(HotelWithRooms { hotel, rooms }))
    }
}
