//! 酒店 API 处理器
//!
//! 错误到状态码的映射见 [`crate::error::HotelError`] 的 `IntoResponse` 实现

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::{
    error::Result,
    middleware::AuthUser,
    models::{Hotel, HotelWithRooms},
    state::AppState,
};

/// 酒店列表
///
/// GET /hotels
pub async fn get_hotels(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Hotel>>> {
    let hotels = state.hotel_service.list_hotels(user.user_id).await?;
    Ok(Json(hotels))
}

/// 酒店详情（含房间），酒店不存在时返回 `null`
///
/// GET /hotels/{hotel_id}
pub async fn get_hotel_by_id(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(hotel_id): Path<String>,
) -> Result<Json<Option<HotelWithRooms>>> {
    let hotel = state
        .hotel_service
        .find_hotel_by_id(user.user_id, &hotel_id)
        .await?;
    Ok(Json(hotel))
}
