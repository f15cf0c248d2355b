//! 查询层错误类型
//!
//! 区分连接错误、参数错误与查询执行错误，均直接返回给调用方，不做重试

use thiserror::Error;

/// 查询层错误类型
#[derive(Debug, Error)]
pub enum DaoError {
    /// 会话无效或已关闭（I/O、TLS、协议错误、连接池超时或关闭）
    #[error("数据库连接错误: {0}")]
    Connection(#[source] sqlx::Error),

    /// 绑定参数缺失或非法
    #[error("无效的参数: {name} - {message}")]
    Parameter { name: &'static str, message: String },

    /// 数据库拒绝执行语句，或结果无法映射到实体
    #[error("查询执行失败: {0}")]
    QueryExecution(#[source] sqlx::Error),
}

/// 查询层 Result 类型别名
pub type Result<T> = std::result::Result<T, DaoError>;

impl DaoError {
    /// 构造参数错误
    pub fn parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::Parameter {
            name,
            message: message.into(),
        }
    }

    /// 获取错误码
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Connection(_) => "CONNECTION_ERROR",
            Self::Parameter { .. } => "PARAMETER_ERROR",
            Self::QueryExecution(_) => "QUERY_EXECUTION_ERROR",
        }
    }

    /// 是否为连接错误
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<sqlx::Error> for DaoError {
    fn from(err: sqlx::Error) -> Self {
        if is_connection_failure(&err) {
            Self::Connection(err)
        } else {
            Self::QueryExecution(err)
        }
    }
}

/// 判断 sqlx 错误是否来自会话本身
///
/// SQLSTATE 08xxx 为连接异常，57P01~57P03 为服务端关闭会话
fn is_connection_failure(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| code.starts_with("08") || code.starts_with("57P0")),
        _ => false,
    }
}
