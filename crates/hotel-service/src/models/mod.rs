//! 酒店服务领域模型
//!
//! 报名、门票、酒店三组实体，本服务对它们只读。

pub mod enrollment;
pub mod enums;
pub mod hotel;
pub mod session;

pub use enrollment::{Enrollment, Ticket, TicketType};
pub use enums::TicketStatus;
pub use hotel::{Hotel, HotelWithRooms, Room};
pub use session::Session;
