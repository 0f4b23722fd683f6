//! HTTP 测试公共设施
//!
//! 内存仓储 + 测试数据构造，按场景拼装 AppState。

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{DateTime, SubsecRound, Utc};
use fake::{Fake, faker::company::en::CompanyName, faker::name::en::FirstName};
use tower::ServiceExt;

use hotel_service::{
    HotelError, HotelService,
    auth::{JwtConfig, JwtManager},
    models::{Enrollment, Hotel, HotelWithRooms, Room, Session, Ticket, TicketStatus, TicketType},
    repository::{
        EnrollmentRepositoryTrait, HotelRepositoryTrait, SessionRepositoryTrait,
        TicketRepositoryTrait,
    },
    routes,
    state::AppState,
};

pub const JWT_SECRET: &str = "hotel-test-secret";

fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// 内存数据集，实现全部仓储接口
#[derive(Default)]
pub struct InMemoryStore {
    pub sessions: Vec<Session>,
    pub enrollments: Vec<Enrollment>,
    pub tickets: Vec<Ticket>,
    pub ticket_types: Vec<TicketType>,
    pub hotels: Vec<Hotel>,
    pub rooms: Vec<Room>,
    /// 模拟数据库不可用
    pub fail_hotel_queries: bool,
}

impl InMemoryStore {
    fn next_id(len: usize) -> i32 {
        len as i32 + 1
    }

    /// 新建用户并登录，返回 (user_id, token)
    pub fn create_user_with_session(&mut self, jwt: &JwtManager) -> (i32, String) {
        let user_id = Self::next_id(self.sessions.len()) * 10;
        let token = jwt.generate_token(user_id).unwrap();
        self.sessions.push(Session {
            id: Self::next_id(self.sessions.len()),
            user_id,
            token: token.clone(),
            created_at: now(),
            updated_at: now(),
        });
        (user_id, token)
    }

    pub fn create_enrollment(&mut self, user_id: i32) -> Enrollment {
        let enrollment = Enrollment {
            id: Self::next_id(self.enrollments.len()),
            user_id,
            created_at: now(),
            updated_at: now(),
        };
        self.enrollments.push(enrollment.clone());
        enrollment
    }

    pub fn create_ticket_type(&mut self, is_remote: bool, includes_hotel: bool) -> TicketType {
        let ticket_type = TicketType {
            id: Self::next_id(self.ticket_types.len()),
            name: FirstName().fake(),
            price: (100..1000).fake(),
            is_remote,
            includes_hotel,
            created_at: now(),
            updated_at: now(),
        };
        self.ticket_types.push(ticket_type.clone());
        ticket_type
    }

    pub fn create_ticket(
        &mut self,
        enrollment_id: i32,
        ticket_type_id: i32,
        status: TicketStatus,
    ) -> Ticket {
        let ticket = Ticket {
            id: Self::next_id(self.tickets.len()),
            ticket_type_id,
            enrollment_id,
            status,
            created_at: now(),
            updated_at: now(),
        };
        self.tickets.push(ticket.clone());
        ticket
    }

    pub fn create_hotel(&mut self) -> Hotel {
        let id = Self::next_id(self.hotels.len());
        let hotel = Hotel {
            id,
            name: CompanyName().fake(),
            image: format!("https://picsum.photos/seed/hotel-{}/640/480", id),
            created_at: now(),
            updated_at: now(),
        };
        self.hotels.push(hotel.clone());
        hotel
    }

    pub fn create_room(&mut self, hotel_id: i32) -> Room {
        let room = Room {
            id: Self::next_id(self.rooms.len()),
            name: FirstName().fake(),
            capacity: (1..=4).fake(),
            hotel_id,
            created_at: now(),
            updated_at: now(),
        };
        self.rooms.push(room.clone());
        room
    }

    /// 报名 + 指定状态门票 + 指定类型
    pub fn create_ticket_for(
        &mut self,
        user_id: i32,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) {
        let enrollment = self.create_enrollment(user_id);
        let ticket_type = self.create_ticket_type(is_remote, includes_hotel);
        self.create_ticket(enrollment.id, ticket_type.id, status);
    }
}

#[async_trait]
impl EnrollmentRepositoryTrait for InMemoryStore {
    async fn find_by_user_id(&self, user_id: i32) -> hotel_service::Result<Option<Enrollment>> {
        Ok(self
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl TicketRepositoryTrait for InMemoryStore {
    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> hotel_service::Result<Option<Ticket>> {
        Ok(self
            .tickets
            .iter()
            .find(|t| t.enrollment_id == enrollment_id)
            .cloned())
    }

    async fn find_ticket_type(
        &self,
        ticket_type_id: i32,
    ) -> hotel_service::Result<Option<TicketType>> {
        Ok(self
            .ticket_types
            .iter()
            .find(|t| t.id == ticket_type_id)
            .cloned())
    }
}

#[async_trait]
impl HotelRepositoryTrait for InMemoryStore {
    async fn list_hotels(&self) -> hotel_service::Result<Vec<Hotel>> {
        if self.fail_hotel_queries {
            return Err(HotelError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.hotels.clone())
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i32,
    ) -> hotel_service::Result<Option<HotelWithRooms>> {
        if self.fail_hotel_queries {
            return Err(HotelError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .hotels
            .iter()
            .find(|h| h.id == hotel_id)
            .cloned()
            .map(|hotel| HotelWithRooms {
                rooms: self
                    .rooms
                    .iter()
                    .filter(|r| r.hotel_id == hotel.id)
                    .cloned()
                    .collect(),
                hotel,
            }))
    }
}

#[async_trait]
impl SessionRepositoryTrait for InMemoryStore {
    async fn find_by_token(&self, token: &str) -> hotel_service::Result<Option<Session>> {
        Ok(self.sessions.iter().find(|s| s.token == token).cloned())
    }
}

pub fn jwt_manager() -> JwtManager {
    JwtManager::new(JwtConfig::new(JWT_SECRET))
}

/// 用内存数据集构建完整路由
pub fn app(store: InMemoryStore) -> Router {
    let store = Arc::new(store);
    let hotel_service = HotelService::new(store.clone(), store.clone(), store.clone());
    let state = AppState::from_parts(Arc::new(hotel_service), jwt_manager(), store);
    routes::app(state)
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
