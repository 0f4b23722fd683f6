//! Bearer Token 认证中间件
//!
//! 校验 JWT 签名，并要求会话表中存在该 Token，通过后把用户 ID 注入请求扩展

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use hotel_shared::observability::metrics;

use crate::error::HotelError;
use crate::state::AppState;

/// 已认证用户，由认证中间件写入请求扩展
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

/// 认证中间件
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()).map(str::to_owned) else {
        return unauthorized("missing_token", "missing bearer token");
    };

    let claims = match state.jwt_manager.verify_token(&token) {
        Ok(claims) => claims,
        Err(e) => return unauthorized("invalid_token", &e.to_string()),
    };

    match state.session_repo.find_by_token(&token).await {
        Ok(Some(_)) => {}
        Ok(None) => return unauthorized("no_session", "session not found"),
        Err(e) => {
            warn!(error = %e, user_id = claims.user_id, "Session lookup failed");
            return unauthorized("session_lookup_failed", "session lookup failed");
        }
    }

    request.extensions_mut().insert(AuthUser {
        user_id: claims.user_id,
    });
    next.run(request).await
}

/// 从 Authorization header 提取 Bearer Token
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn unauthorized(reason: &'static str, message: &str) -> Response {
    metrics::record_auth_rejection(reason);
    HotelError::Unauthorized(message.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
