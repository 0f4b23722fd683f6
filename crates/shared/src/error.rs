//! 基础设施错误类型
//!
//! 只覆盖共享层自身会产生的错误（数据库连接、迁移、配置），
//! 业务错误由各服务自行定义。

use thiserror::Error;

/// 共享基础设施错误
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("数据库迁移失败: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),
}

/// 共享层 Result 类型别名
pub type Result<T> = std::result::Result<T, SharedError>;
