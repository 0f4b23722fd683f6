//! 统一可观测性模块
//!
//! 提供 metrics、tracing、logging 的统一初始化。
//! 服务通过单一入口点配置可观测性，保证指标命名和追踪传播一致。

pub mod metrics;
pub mod middleware;
pub mod tracing;

use ::tracing::info;
use anyhow::Result;
use serde::Deserialize;

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// 服务名称，用于标识追踪和指标的来源
    pub service_name: String,

    /// 日志级别（如 "info", "debug"），RUST_LOG 优先
    pub log_level: String,

    /// 是否输出 JSON 格式日志
    pub json_logs: bool,

    /// OpenTelemetry OTLP 端点，为空时不导出追踪
    pub otlp_endpoint: Option<String>,

    pub metrics_enabled: bool,

    /// Prometheus 指标导出端口
    pub metrics_port: u16,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "hotel-service".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            otlp_endpoint: None,
            metrics_enabled: true,
            metrics_port: 9090,
        }
    }
}

impl ObservabilityConfig {
    /// 注入服务名（AppConfig 中的 service_name 优先）
    pub fn with_service_name(mut self, service_name: &str) -> Self {
        self.service_name = service_name.to_string();
        self
    }
}

/// 可观测性资源守卫
///
/// 持有追踪 provider 和指标服务器的生命周期，drop 时刷新待发送的 span。
pub struct ObservabilityGuard {
    _metrics_handle: Option<metrics::MetricsHandle>,
    _tracing_guard: Option<tracing::TracingGuard>,
}

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        info!("Shutting down observability...");
    }
}

/// 统一初始化可观测性
///
/// 先初始化 tracing，保证 metrics 初始化过程中的日志可见。
///
/// ```ignore
/// let config = AppConfig::load("hotel-service")?;
/// let obs = config.observability.clone().with_service_name(&config.service_name);
/// let _guard = hotel_shared::observability::init(&obs).await?;
/// ```
pub async fn init(config: &ObservabilityConfig) -> Result<ObservabilityGuard> {
    let tracing_guard = tracing::init(config)?;

    info!(
        service = %config.service_name,
        metrics_enabled = config.metrics_enabled,
        metrics_port = config.metrics_port,
        otlp_endpoint = ?config.otlp_endpoint,
        "Observability initialized"
    );

    let metrics_handle = if config.metrics_enabled {
        Some(metrics::init(config).await?)
    } else {
        None
    };

    Ok(ObservabilityGuard {
        _metrics_handle: metrics_handle,
        _tracing_guard: Some(tracing_guard),
    })
}
