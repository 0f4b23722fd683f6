//! 酒店查询服务
//!
//! 返回酒店数据前，按固定顺序校验用户资格：
//!
//! 1. 用户已报名
//! 2. 报名下存在门票
//! 3. 门票已支付
//! 4. 门票类型存在
//! 5. 门票类型不是线上票
//! 6. 门票类型包含酒店
//!
//! 任一步失败立即返回，不重试；查询按顺序逐个 await。

use std::sync::Arc;

use tracing::{debug, info, instrument};

use hotel_shared::observability::metrics;

use crate::error::{HotelError, Result};
use crate::models::{Hotel, HotelWithRooms, TicketType};
use crate::repository::{EnrollmentRepositoryTrait, HotelRepositoryTrait, TicketRepositoryTrait};

/// 酒店查询服务
pub struct HotelService {
    enrollment_repo: Arc<dyn EnrollmentRepositoryTrait>,
    ticket_repo: Arc<dyn TicketRepositoryTrait>,
    hotel_repo: Arc<dyn HotelRepositoryTrait>,
}

impl HotelService {
    pub fn new(
        enrollment_repo: Arc<dyn EnrollmentRepositoryTrait>,
        ticket_repo: Arc<dyn TicketRepositoryTrait>,
        hotel_repo: Arc<dyn HotelRepositoryTrait>,
    ) -> Self {
        Self {
            enrollment_repo,
            ticket_repo,
            hotel_repo,
        }
    }

    /// 列出全部酒店（可能为空）
    #[instrument(skip(self))]
    pub async fn list_hotels(&self, user_id: i32) -> Result<Vec<Hotel>> {
        self.ensure_eligible(user_id).await?;

        let hotels = self.hotel_repo.list_hotels().await?;
        debug!(user_id, count = hotels.len(), "Hotels listed");
        Ok(hotels)
    }

    /// 查询单个酒店及其房间
    ///
    /// `hotel_id` 为路径原文，资格校验通过后才解析为整数。
    /// 不校验酒店是否存在，不存在时原样返回 None
    #[instrument(skip(self))]
    pub async fn find_hotel_by_id(
        &self,
        user_id: i32,
        hotel_id: &str,
    ) -> Result<Option<HotelWithRooms>> {
        self.ensure_eligible(user_id).await?;

        let hotel_id: i32 = hotel_id
            .parse()
            .map_err(|_| HotelError::InvalidHotelId(hotel_id.to_string()))?;

        let hotel = self.hotel_repo.find_hotel_with_rooms(hotel_id).await?;
        debug!(user_id, hotel_id, found = hotel.is_some(), "Hotel fetched");
        Ok(hotel)
    }

    /// 资格校验，通过时返回用户的门票类型
    async fn ensure_eligible(&self, user_id: i32) -> Result<TicketType> {
        let enrollment = self
            .enrollment_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(HotelError::EnrollmentNotFound { user_id })
            .map_err(reject)?;

        let ticket = self
            .ticket_repo
            .find_ticket_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(HotelError::TicketNotFound {
                enrollment_id: enrollment.id,
            })
            .map_err(reject)?;

        if !ticket.status.is_paid() {
            return Err(reject(HotelError::TicketNotPaid {
                ticket_id: ticket.id,
            }));
        }

        let ticket_type = self
            .ticket_repo
            .find_ticket_type(ticket.ticket_type_id)
            .await?
            .ok_or(HotelError::TicketTypeNotFound(ticket.ticket_type_id))
            .map_err(reject)?;

        if ticket_type.is_remote {
            return Err(reject(HotelError::RemoteTicket {
                ticket_type_id: ticket_type.id,
            }));
        }

        if !ticket_type.includes_hotel {
            return Err(reject(HotelError::HotelNotIncluded {
                ticket_type_id: ticket_type.id,
            }));
        }

        Ok(ticket_type)
    }
}

/// 记录资格校验拒绝并原样返回错误
fn reject(err: HotelError) -> HotelError {
    if let Some(reason) = err.rejection_reason() {
        metrics::record_eligibility_rejection(reason);
        info!(reason, error = %err, "Hotel access rejected");
    }
    err
}
