//! 业务服务层

mod hotel_service;

pub use hotel_service::HotelService;
