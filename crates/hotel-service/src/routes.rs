//! 路由配置模块

use axum::{Router, middleware, routing::get};

use crate::{handlers, middleware::auth_middleware, state::AppState};

/// 酒店路由（需要认证）
pub fn hotel_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/hotels", get(handlers::hotels::get_hotels))
        .route("/hotels/{hotel_id}", get(handlers::hotels::get_hotel_by_id))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// 绑定状态后的业务路由
pub fn app(state: AppState) -> Router {
    hotel_routes(state.clone()).with_state(state)
}
