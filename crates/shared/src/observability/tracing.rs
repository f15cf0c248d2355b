//! 日志初始化模块
//!
//! 基于 tracing-subscriber 构建日志输出，支持 JSON 与 pretty 两种格式，
//! 日志级别优先读取 RUST_LOG，其次使用配置文件中的 log_level。

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::ObservabilityConfig;
use crate::error::{Result, SharedError};

/// 构建环境过滤器
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 构建格式化输出层，JSON 与 pretty 两种格式都写入给定的 writer
pub fn fmt_layer<S, W>(
    config: &ObservabilityConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if config.json_logs() {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .with_writer(writer)
            .boxed()
    }
}

/// 初始化全局日志 subscriber
///
/// 日志统一写入 stderr，stdout 留给报表输出。
/// 重复初始化返回 `SharedError::Observability`，不会 panic
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer(config, std::io::stderr))
        .try_init()
        .map_err(|e| SharedError::Observability(e.to_string()))
}

/// 测试用日志初始化，输出交给 libtest 捕获，可多次调用
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
