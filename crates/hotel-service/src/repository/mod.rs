//! 数据库仓储层
//!
//! 只读查询：报名、门票、门票类型、酒店/房间、会话。
//!
//! - 仓储只负责数据访问，不包含业务逻辑
//! - 定义 trait 接口，服务层依赖抽象以便替换为 mock 或内存实现
//! - 表结构见工作区根目录 migrations/

mod enrollment_repo;
mod hotel_repo;
mod session_repo;
mod ticket_repo;
mod traits;

pub use enrollment_repo::EnrollmentRepository;
pub use hotel_repo::HotelRepository;
pub use session_repo::SessionRepository;
pub use ticket_repo::TicketRepository;
pub use traits::*;
