//! 登录会话

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 登录会话，token 必须存在对应会话才视为有效
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
