//! JWT Token 处理
//!
//! Token 载荷为 `{ "userId": <int> }`，`iat` / `exp` 可选。
//! 带 `exp` 的 Token 过期即失效；不带 `exp` 的 Token 由会话表控制有效性。

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::HotelError;

/// JWT 配置
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 签名密钥（HS256）
    pub secret: String,
    /// Token 过期时间（秒），None 表示签发不带 exp 的 Token
    pub expires_in_secs: Option<i64>,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in_secs: None,
        }
    }
}

/// JWT Claims（Token 载荷）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// JWT 管理器
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 为用户签发 Token
    pub fn generate_token(&self, user_id: i32) -> Result<String, HotelError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            iat: Some(now.timestamp()),
            exp: self
                .config
                .expires_in_secs
                .map(|secs| (now + Duration::seconds(secs)).timestamp()),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| HotelError::Internal(format!("failed to sign token: {}", e)))
    }

    /// 验证并解析 Token
    pub fn verify_token(&self, token: &str) -> Result<Claims, HotelError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp 非必填，存在时仍校验是否过期
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    HotelError::Unauthorized("token expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    HotelError::Unauthorized("invalid token".to_string())
                }
                _ => HotelError::Unauthorized(format!("token verification failed: {}", e)),
            },
        )?;

        Ok(token_data.claims)
    }
}
