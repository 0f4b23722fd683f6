//! 酒店查询服务
//!
//! 为已报名、已购买线下含酒店门票的用户提供酒店列表和酒店详情 REST API。
//!
//! ## 请求链路
//!
//! 认证中间件（JWT + 会话）→ `handlers` → `service::HotelService`（资格校验）→ `repository`
//!
//! ## 模块结构
//!
//! - `auth`: JWT Token 生成与验证
//! - `error`: 错误类型及 HTTP 状态码映射
//! - `handlers`: HTTP 请求处理器
//! - `middleware`: 认证中间件
//! - `models`: 领域模型
//! - `repository`: 数据库仓储层
//! - `routes`: 路由配置
//! - `service`: 资格校验与酒店查询
//! - `state`: 应用状态

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use error::{ErrorKind, HotelError, Result};
pub use models::*;
pub use service::HotelService;
