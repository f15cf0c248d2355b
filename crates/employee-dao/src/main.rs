//! 员工薪酬报表程序
//!
//! 加载配置、初始化日志与指标、建立连接池后执行一个报表子命令，结果以 JSON 输出到 stdout。

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use payroll_shared::{config::AppConfig, database::Database, observability};
use tracing::{debug, info, warn};

use employee_dao::{
    EmployeeRepository, PayrollReportService,
    cli::{Cli, CommandRunner},
};

const SERVICE_NAME: &str = "employee-report";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 加载配置，失败时使用默认值并在日志初始化后告警
    let (mut config, load_error) = match AppConfig::load(SERVICE_NAME) {
        Ok(config) => (config, None),
        Err(e) => (
            AppConfig {
                service_name: SERVICE_NAME.to_string(),
                ..Default::default()
            },
            Some(e),
        ),
    };
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    // 2. 初始化可观测性
    let guard = observability::init(&config.service_name, &config.observability)?;
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }
    info!(environment = %config.environment, "Configuration loaded");

    // 3. 初始化数据库连接
    let db = Database::connect(&config.database).await?;
    if cli.migrate || config.database.run_migrations {
        db.run_migrations().await?;
    }

    // 4. 创建仓储与服务
    let repo = Arc::new(EmployeeRepository::new(db.pool().clone()));
    let runner = CommandRunner::new(PayrollReportService::new(repo));

    // 5. 执行命令，连接池在返回前关闭
    let outcome = runner.run(&cli.command).await;
    db.close().await;

    let value = outcome?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    if let Some(snapshot) = guard.render_metrics() {
        debug!(metrics = %snapshot, "Query metrics snapshot");
    }

    Ok(())
}
