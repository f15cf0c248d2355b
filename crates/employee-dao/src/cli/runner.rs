//! 命令执行器
//!
//! 将子命令映射到仓储查询或报表服务，结果统一序列化为 JSON

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::commands::Commands;
use crate::repository::EmployeeRepositoryTrait;
use crate::service::PayrollReportService;

/// 命令执行器
pub struct CommandRunner<R>
where
    R: EmployeeRepositoryTrait,
{
    service: PayrollReportService<R>,
}

impl<R> CommandRunner<R>
where
    R: EmployeeRepositoryTrait,
{
    pub fn new(service: PayrollReportService<R>) -> Self {
        Self { service }
    }

    /// 执行子命令，返回 JSON 结果
    ///
    /// 查询错误以 `DaoError` 形式包装在 anyhow 错误中，可通过 `downcast_ref` 取回
    pub async fn run(&self, command: &Commands) -> Result<Value> {
        info!(?command, "Running report command");

        let repo = self.service.repository();
        match command {
            Commands::Employees {
                first_name: Some(first_name),
                ..
            } => to_json(&repo.find_all_by_first_name(first_name).await?),
            Commands::Employees {
                organization: Some(organization),
                ..
            } => to_json(&repo.find_all_by_organization_name(organization).await?),
            Commands::Employees { .. } => to_json(&repo.find_all().await?),
            Commands::Oldest { limit } => {
                to_json(&repo.find_limited_ordered_by_birthday(*limit).await?)
            }
            Commands::Payments { organization } => to_json(
                &repo
                    .find_all_payments_by_organization_name(organization)
                    .await?,
            ),
            Commands::Average {
                first_name,
                last_name,
            } => to_json(&self.service.employee_average(first_name, last_name).await?),
            Commands::OrgAverages => to_json(&repo.find_organization_average_payments().await?),
            Commands::AboveAverage => {
                to_json(&repo.find_employees_above_organization_average().await?)
            }
            Commands::Organization { name } => {
                to_json(&self.service.organization_report(name).await?)
            }
            Commands::Overview { limit } => to_json(&self.service.payroll_overview(*limit).await?),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("Failed to serialize report output")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;
    use crate::error::DaoError;
    use crate::models::{Employee, EmployeeAveragePayment};
    use crate::repository::MockEmployeeRepositoryTrait;

    fn runner(repo: MockEmployeeRepositoryTrait) -> CommandRunner<MockEmployeeRepositoryTrait> {
        CommandRunner::new(PayrollReportService::new(Arc::new(repo)))
    }

    fn bob() -> Employee {
        Employee {
            id: 2,
            first_name: "Bob".to_string(),
            last_name: "Stone".to_string(),
            birthday: None,
            organization_id: Some(1),
        }
    }

    #[tokio::test]
    async fn test_employees_dispatch_by_filter() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_all_by_first_name()
            .withf(|name: &str| name == "Bob")
            .times(1)
            .returning(|_| Ok(vec![bob()]));
        repo.expect_find_all().times(1).returning(|| Ok(vec![]));

        let runner = runner(repo);
        let value = runner
            .run(&Commands::Employees {
                first_name: Some("Bob".to_string()),
                organization: None,
            })
            .await
            .unwrap();
        assert_eq!(value[0]["firstName"], "Bob");

        let value = runner
            .run(&Commands::Employees {
                first_name: None,
                organization: None,
            })
            .await
            .unwrap();
        assert_eq!(value, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_above_average_json_shape() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_employees_above_organization_average()
            .returning(|| {
                Ok(vec![EmployeeAveragePayment {
                    employee: bob(),
                    average_amount: Decimal::new(200, 0),
                }])
            });

        let value = runner(repo).run(&Commands::AboveAverage).await.unwrap();
        assert_eq!(value[0]["employee"]["lastName"], "Stone");
        assert_eq!(value[0]["averageAmount"], "200");
    }

    #[tokio::test]
    async fn test_average_absent_serializes_null() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_average_payment_by_full_name()
            .returning(|_, _| Ok(None));

        let value = runner(repo)
            .run(&Commands::Average {
                first_name: "Nobody".to_string(),
                last_name: "Known".to_string(),
            })
            .await
            .unwrap();
        assert!(value["averageAmount"].is_null());
    }

    #[tokio::test]
    async fn test_parameter_error_propagates() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_limited_ordered_by_birthday()
            .returning(|limit| {
                Err(DaoError::parameter(
                    "limit",
                    format!("must be non-negative, got {}", limit),
                ))
            });

        let err = runner(repo)
            .run(&Commands::Oldest { limit: -1 })
            .await
            .unwrap_err();
        let dao_err = err.downcast_ref::<DaoError>().unwrap();
        assert_eq!(dao_err.error_code(), "PARAMETER_ERROR");
    }

    #[test]
    fn test_to_json_propagates_serialization_error() {
        // JSON 对象的键必须是字符串
        let mut value = std::collections::HashMap::new();
        value.insert((1, 2), "pair key");

        let err = to_json(&value).unwrap_err();
        assert!(err.to_string().contains("serialize report output"));
    }
}
