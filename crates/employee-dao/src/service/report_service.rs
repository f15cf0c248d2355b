//! 薪酬报表服务
//!
//! 组合仓储的只读查询生成组织报表与全局概览，不做缓存

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::error::Result;
use crate::repository::EmployeeRepositoryTrait;
use crate::service::dto::{
    EmployeeAverageDto, OrganizationReportDto, PaymentLineDto, PayrollOverviewDto,
};

/// 薪酬报表服务
pub struct PayrollReportService<R>
where
    R: EmployeeRepositoryTrait,
{
    repo: Arc<R>,
}

impl<R> PayrollReportService<R>
where
    R: EmployeeRepositoryTrait,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 获取底层仓储，供命令行执行单个查询
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// 生成单个组织的报表：员工列表、发放明细与合计
    #[instrument(skip(self))]
    pub async fn organization_report(&self, organization_name: &str) -> Result<OrganizationReportDto> {
        let employees = self
            .repo
            .find_all_by_organization_name(organization_name)
            .await?;
        let payments = self
            .repo
            .find_all_payments_by_organization_name(organization_name)
            .await?;

        let names: HashMap<i64, String> = employees
            .iter()
            .map(|e| (e.id, e.full_name()))
            .collect();

        let payment_total: Decimal = payments.iter().map(|p| p.amount).sum();
        let lines: Vec<PaymentLineDto> = payments
            .into_iter()
            .map(|p| PaymentLineDto {
                payment_id: p.id,
                receiver_id: p.receiver_id,
                receiver_name: names.get(&p.receiver_id).cloned(),
                amount: p.amount,
            })
            .collect();

        info!(
            organization = %organization_name,
            employees = employees.len(),
            payments = lines.len(),
            "Organization report built"
        );

        Ok(OrganizationReportDto {
            organization_name: organization_name.to_string(),
            employees,
            payment_count: lines.len(),
            payments: lines,
            payment_total,
        })
    }

    /// 生成全局概览
    ///
    /// `birthday_limit` 为按生日升序返回的员工数上限
    #[instrument(skip(self))]
    pub async fn payroll_overview(&self, birthday_limit: i64) -> Result<PayrollOverviewDto> {
        let employee_count = self.repo.find_all().await?.len();
        let organization_averages = self.repo.find_organization_average_payments().await?;
        let above_organization_average = self
            .repo
            .find_employees_above_organization_average()
            .await?;
        let oldest_employees = self
            .repo
            .find_limited_ordered_by_birthday(birthday_limit)
            .await?;

        info!(
            employee_count,
            organizations = organization_averages.len(),
            above_average = above_organization_average.len(),
            "Payroll overview built"
        );

        Ok(PayrollOverviewDto {
            employee_count,
            organization_averages,
            above_organization_average,
            oldest_employees,
        })
    }

    /// 查询员工平均发放额
    #[instrument(skip(self))]
    pub async fn employee_average(&self, first_name: &str, last_name: &str) -> Result<EmployeeAverageDto> {
        let average_amount = self
            .repo
            .find_average_payment_by_full_name(first_name, last_name)
            .await?;

        Ok(EmployeeAverageDto {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            average_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DaoError;
    use crate::models::{Employee, EmployeeAveragePayment, OrganizationAveragePayment, Payment};
    use crate::repository::MockEmployeeRepositoryTrait;

    fn employee(id: i64, first_name: &str, organization_id: Option<i64>) -> Employee {
        Employee {
            id,
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            birthday: None,
            organization_id,
        }
    }

    fn payment(id: i64, cents: i64, receiver_id: i64) -> Payment {
        Payment {
            id,
            amount: Decimal::new(cents, 2),
            receiver_id,
        }
    }

    #[tokio::test]
    async fn test_organization_report_totals_and_names() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_all_by_organization_name()
            .withf(|name: &str| name == "A")
            .times(1)
            .returning(|_| Ok(vec![employee(1, "Alice", Some(10)), employee(2, "Bob", Some(10))]));
        repo.expect_find_all_payments_by_organization_name()
            .withf(|name: &str| name == "A")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    payment(100, 10000, 1),
                    payment(101, 20000, 2),
                    payment(102, 5050, 2),
                ])
            });

        let service = PayrollReportService::new(Arc::new(repo));
        let report = service.organization_report("A").await.unwrap();

        assert_eq!(report.organization_name, "A");
        assert_eq!(report.employees.len(), 2);
        assert_eq!(report.payment_count, 3);
        assert_eq!(report.payment_total, Decimal::new(35050, 2));
        // 保持查询返回的顺序
        let ids: Vec<i64> = report.payments.iter().map(|l| l.payment_id).collect();
        assert_eq!(ids, vec![100, 101, 102]);
        assert_eq!(report.payments[1].receiver_name.as_deref(), Some("Bob Tester"));
    }

    #[tokio::test]
    async fn test_organization_report_empty_organization() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_all_by_organization_name()
            .returning(|_| Ok(vec![]));
        repo.expect_find_all_payments_by_organization_name()
            .returning(|_| Ok(vec![]));

        let service = PayrollReportService::new(Arc::new(repo));
        let report = service.organization_report("Nowhere").await.unwrap();

        assert!(report.employees.is_empty());
        assert_eq!(report.payment_count, 0);
        assert_eq!(report.payment_total, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_payroll_overview_composes_queries() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                employee(1, "Alice", Some(10)),
                employee(2, "Bob", Some(10)),
                employee(3, "Carol", Some(20)),
            ])
        });
        repo.expect_find_organization_average_payments()
            .times(1)
            .returning(|| {
                Ok(vec![
                    OrganizationAveragePayment {
                        organization_name: "A".to_string(),
                        average_amount: Decimal::new(150, 0),
                    },
                    OrganizationAveragePayment {
                        organization_name: "B".to_string(),
                        average_amount: Decimal::new(50, 0),
                    },
                ])
            });
        repo.expect_find_employees_above_organization_average()
            .times(1)
            .returning(|| {
                Ok(vec![EmployeeAveragePayment {
                    employee: employee(2, "Bob", Some(10)),
                    average_amount: Decimal::new(200, 0),
                }])
            });
        repo.expect_find_limited_ordered_by_birthday()
            .withf(|limit: &i64| *limit == 2)
            .times(1)
            .returning(|_| Ok(vec![employee(3, "Carol", Some(20)), employee(1, "Alice", Some(10))]));

        let service = PayrollReportService::new(Arc::new(repo));
        let overview = service.payroll_overview(2).await.unwrap();

        assert_eq!(overview.employee_count, 3);
        assert_eq!(overview.organization_averages.len(), 2);
        assert_eq!(overview.above_organization_average.len(), 1);
        assert_eq!(overview.above_organization_average[0].employee.first_name, "Bob");
        assert_eq!(overview.oldest_employees.len(), 2);
    }

    #[tokio::test]
    async fn test_payroll_overview_propagates_errors() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_all()
            .returning(|| Err(DaoError::from(sqlx::Error::PoolClosed)));

        let service = PayrollReportService::new(Arc::new(repo));
        let err = service.payroll_overview(5).await.unwrap_err();
        assert!(err.is_connection_error());
    }

    #[tokio::test]
    async fn test_employee_average_absent() {
        let mut repo = MockEmployeeRepositoryTrait::new();
        repo.expect_find_average_payment_by_full_name()
            .withf(|first: &str, last: &str| first == "Nobody" && last == "Known")
            .returning(|_, _| Ok(None));

        let service = PayrollReportService::new(Arc::new(repo));
        let dto = service.employee_average("Nobody", "Known").await.unwrap();

        assert_eq!(dto.first_name, "Nobody");
        assert!(dto.average_amount.is_none());
    }
}
