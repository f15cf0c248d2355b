//! 查询指标模块
//!
//! 基于 metrics crate 记录查询次数与耗时，metrics-exporter-prometheus 作为进程内 recorder，
//! 报表程序退出前可渲染 Prometheus 文本快照。

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

use crate::error::{Result, SharedError};

/// 查询总数指标名
pub const QUERIES_TOTAL: &str = "payroll_queries_total";
/// 查询耗时指标名
pub const QUERY_DURATION_SECONDS: &str = "payroll_query_duration_seconds";

/// 全局 Prometheus handle，用于渲染指标
static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Metrics 资源句柄
#[derive(Clone)]
pub struct MetricsHandle {
    handle: PrometheusHandle,
}

impl MetricsHandle {
    /// 渲染 Prometheus 文本格式快照
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 安装全局 Prometheus recorder
///
/// 同一进程内重复调用时复用首次安装的 recorder
pub fn init(service_name: &str) -> Result<MetricsHandle> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(MetricsHandle {
            handle: handle.clone(),
        });
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| SharedError::Observability(e.to_string()))?;
    let handle = PROMETHEUS_HANDLE.get_or_init(|| handle).clone();

    register_common_metrics(service_name);

    Ok(MetricsHandle { handle })
}

/// 注册通用指标描述
fn register_common_metrics(service_name: &str) {
    metrics::describe_counter!(QUERIES_TOTAL, "Total number of payroll queries");
    metrics::describe_histogram!(
        QUERY_DURATION_SECONDS,
        "Payroll query duration in seconds"
    );

    metrics::counter!("service_starts_total", "service" => service_name.to_string()).increment(1);
}

/// 记录一次查询
///
/// 未安装 recorder 时为空操作
#[inline]
pub fn record_query(query: &'static str, success: bool, duration_secs: f64) {
    let status = if success { "ok" } else { "error" };
    metrics::counter!(QUERIES_TOTAL, "query" => query, "status" => status).increment(1);
    metrics::histogram!(QUERY_DURATION_SECONDS, "query" => query).record(duration_secs);
}
