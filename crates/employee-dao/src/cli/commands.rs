//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use clap::{Parser, Subcommand};

/// 员工薪酬报表命令行工具
#[derive(Parser, Debug)]
#[command(name = "employee-report")]
#[command(version, about = "员工薪酬只读报表工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别，覆盖配置文件 (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// 执行前运行数据库迁移
    #[arg(long)]
    pub migrate: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// 列出员工（可按名字或组织名称过滤）
    Employees {
        /// 名字精确匹配
        #[arg(short, long, conflicts_with = "organization")]
        first_name: Option<String>,

        /// 组织名称精确匹配
        #[arg(short, long)]
        organization: Option<String>,
    },

    /// 按生日升序列出前 N 个员工
    Oldest {
        #[arg(short = 'n', long, default_value = "10")]
        limit: i64,
    },

    /// 列出组织员工收到的发放记录
    Payments {
        #[arg(short, long)]
        organization: String,
    },

    /// 员工（名字 + 姓氏）的平均发放额
    Average {
        #[arg(short, long)]
        first_name: String,

        #[arg(short = 'L', long)]
        last_name: String,
    },

    /// 各组织平均发放额
    OrgAverages,

    /// 个人平均发放额高于所在组织平均值的员工
    AboveAverage,

    /// 单个组织的完整报表
    Organization {
        #[arg(short, long)]
        name: String,
    },

    /// 全局概览
    Overview {
        #[arg(short = 'n', long, default_value = "10")]
        limit: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_employees() {
        let cli = Cli::parse_from(["employee-report", "employees"]);
        assert_eq!(
            cli.command,
            Commands::Employees {
                first_name: None,
                organization: None
            }
        );
        assert!(!cli.migrate);
        assert!(cli.log_level.is_none());

        let cli = Cli::parse_from(["employee-report", "employees", "--organization", "Acme"]);
        assert_eq!(
            cli.command,
            Commands::Employees {
                first_name: None,
                organization: Some("Acme".to_string())
            }
        );
    }

    #[test]
    fn test_cli_employees_filters_conflict() {
        let result = Cli::try_parse_from([
            "employee-report",
            "employees",
            "--first-name",
            "Bob",
            "--organization",
            "Acme",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_defaults_and_globals() {
        let cli = Cli::parse_from(["employee-report", "--migrate", "-l", "debug", "overview"]);
        assert!(cli.migrate);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.command, Commands::Overview { limit: 10 });

        let cli = Cli::parse_from(["employee-report", "oldest", "-n", "3"]);
        assert_eq!(cli.command, Commands::Oldest { limit: 3 });
    }

    #[test]
    fn test_cli_parse_average() {
        let cli = Cli::parse_from([
            "employee-report",
            "average",
            "--first-name",
            "Bob",
            "--last-name",
            "Stone",
        ]);
        assert_eq!(
            cli.command,
            Commands::Average {
                first_name: "Bob".to_string(),
                last_name: "Stone".to_string()
            }
        );
    }

    #[test]
    fn test_cli_requires_subcommand_arguments() {
        assert!(Cli::try_parse_from(["employee-report", "payments"]).is_err());
        assert!(Cli::try_parse_from(["employee-report", "average", "-f", "Bob"]).is_err());
    }
}
