//! CLI 模块
//!
//! 报表命令行，每个子命令对应一个查询或一个组合报表，结果以 JSON 输出到 stdout。
//!
//! # 使用示例
//!
//! ```bash
//! # 全局概览
//! employee-report overview --limit 5
//!
//! # 按组织列出发放记录
//! employee-report payments --organization "Acme"
//!
//! # 个人平均发放额
//! employee-report average --first-name Bob --last-name Stone
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
