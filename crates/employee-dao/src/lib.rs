//! 员工薪酬查询层
//!
//! 基于 organizations / employees / payments 三张表提供一组固定的只读参数化查询：
//! 员工列表、发放记录、平均值聚合以及分组过滤。
//!
//! ## 核心功能
//!
//! - **员工查询**：全部员工、按名字、按生日排序取前 N 个、按组织名称
//! - **发放查询**：按组织名称列出发放记录，按员工名字和金额排序
//! - **聚合查询**：按全名求平均发放额、按组织求平均发放额
//! - **分组过滤**：个人平均发放额高于所在组织平均值的员工
//!
//! ## 模块结构
//!
//! - `models`: 实体与聚合结果定义
//! - `error`: 错误类型定义
//! - `repository`: 查询门面 `EmployeeDao` 与基于连接池的仓储
//! - `service`: 组合多个查询的报表服务
//! - `cli`: 报表命令行

pub mod cli;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{DaoError, Result};
pub use models::*;
pub use repository::{EmployeeDao, EmployeeRepository, EmployeeRepositoryTrait};
pub use service::{PayrollReportService, dto};
