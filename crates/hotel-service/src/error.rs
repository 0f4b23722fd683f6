//! 酒店服务错误类型
//!
//! 业务错误按 [`ErrorKind`] 归类，HTTP 层只根据分类决定状态码。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use hotel_shared::observability::tracing::current_trace_id;

/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 资源不存在（未报名、无门票等）
    NotFound,
    /// 业务规则不满足（未支付、线上票、不含酒店）
    Conflict,
    /// 认证失败
    Unauthorized,
    /// 请求参数错误
    BadRequest,
    /// 未归类的系统错误
    Unknown,
}

impl ErrorKind {
    /// 错误分类名，作为 4xx 响应体返回
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFoundError",
            Self::Conflict => "ConflictError",
            Self::Unauthorized => "UnauthorizedError",
            Self::BadRequest => "BadRequestError",
            Self::Unknown => "InternalServerError",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 酒店服务错误类型
#[derive(Debug, Error)]
pub enum HotelError {
    // === 资格校验：资源不存在 ===
    #[error("enrollment not found: user_id={user_id}")]
    EnrollmentNotFound { user_id: i32 },

    #[error("ticket not found: enrollment_id={enrollment_id}")]
    TicketNotFound { enrollment_id: i32 },

    // === 资格校验：业务冲突 ===
    #[error("ticket not paid: ticket_id={ticket_id}")]
    TicketNotPaid { ticket_id: i32 },

    #[error("ticket is of remote type: ticket_type_id={ticket_type_id}")]
    RemoteTicket { ticket_type_id: i32 },

    // 与线上票共用同一提示
    #[error("ticket is of remote type: ticket_type_id={ticket_type_id}, hotel not included")]
    HotelNotIncluded { ticket_type_id: i32 },

    // === 请求错误 ===
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid hotel id: {0}")]
    InvalidHotelId(String),

    // === 系统错误 ===
    // 门票外键指向的类型缺失，属于数据不一致
    #[error("ticket type not found: {0}")]
    TicketTypeNotFound(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HotelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EnrollmentNotFound { .. } | Self::TicketNotFound { .. } => ErrorKind::NotFound,

            Self::TicketNotPaid { .. } | Self::RemoteTicket { .. } | Self::HotelNotIncluded { .. } => {
                ErrorKind::Conflict
            }

            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::InvalidHotelId(_) => ErrorKind::BadRequest,
            Self::TicketTypeNotFound(_) | Self::Database(_) | Self::Internal(_) => {
                ErrorKind::Unknown
            }
        }
    }

    /// 资格校验拒绝原因（用于指标标签），非资格类错误返回 None
    pub fn rejection_reason(&self) -> Option<&'static str> {
        match self {
            Self::EnrollmentNotFound { .. } => Some("no_enrollment"),
            Self::TicketNotFound { .. } => Some("no_ticket"),
            Self::TicketNotPaid { .. } => Some("ticket_not_paid"),
            Self::RemoteTicket { .. } => Some("remote_ticket"),
            Self::HotelNotIncluded { .. } => Some("hotel_not_included"),
            _ => None,
        }
    }
}

impl IntoResponse for HotelError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        if kind == ErrorKind::Unknown {
            tracing::error!(
                error = %self,
                trace_id = ?current_trace_id(),
                "Request failed"
            );
        }

        (kind.status_code(), kind.name()).into_response()
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, HotelError>;
