//! 业务服务层
//!
//! 组合多个只读查询生成报表

pub mod dto;
mod report_service;

pub use report_service::PayrollReportService;
