//! 仓储 Trait 定义

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Enrollment, Hotel, HotelWithRooms, Session, Ticket, TicketType};

/// 报名仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepositoryTrait: Send + Sync {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>>;
}

/// 门票仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepositoryTrait: Send + Sync {
    async fn find_ticket_by_enrollment_id(&self, enrollment_id: i32) -> Result<Option<Ticket>>;
    async fn find_ticket_type(&self, ticket_type_id: i32) -> Result<Option<TicketType>>;
}

/// 酒店仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepositoryTrait: Send + Sync {
    async fn list_hotels(&self) -> Result<Vec<Hotel>>;
    async fn find_hotel_with_rooms(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>>;
}

/// 会话仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepositoryTrait: Send + Sync {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>>;
}
