//! 应用状态定义

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{JwtConfig, JwtManager};
use crate::repository::{
    EnrollmentRepository, HotelRepository, SessionRepository, SessionRepositoryTrait,
    TicketRepository,
};
use crate::service::HotelService;

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub hotel_service: Arc<HotelService>,
    pub jwt_manager: JwtManager,
    pub session_repo: Arc<dyn SessionRepositoryTrait>,
}

impl AppState {
    /// 基于 PostgreSQL 连接池装配仓储和服务
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        let hotel_service = HotelService::new(
            Arc::new(EnrollmentRepository::new(pool.clone())),
            Arc::new(TicketRepository::new(pool.clone())),
            Arc::new(HotelRepository::new(pool.clone())),
        );

        Self::from_parts(
            Arc::new(hotel_service),
            JwtManager::new(jwt_config),
            Arc::new(SessionRepository::new(pool)),
        )
    }

    /// 用任意仓储实现装配（测试中注入内存实现）
    pub fn from_parts(
        hotel_service: Arc<HotelService>,
        jwt_manager: JwtManager,
        session_repo: Arc<dyn SessionRepositoryTrait>,
    ) -> Self {
        Self {
            hotel_service,
            jwt_manager,
            session_repo,
        }
    }
}
