//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{Employee, EmployeeAveragePayment, OrganizationAveragePayment, Payment};

/// 员工薪酬仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepositoryTrait: Send + Sync {
    // 员工
    async fn find_all(&self) -> Result<Vec<Employee>>;
    async fn find_all_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>>;
    async fn find_limited_ordered_by_birthday(&self, limit: i64) -> Result<Vec<Employee>>;
    async fn find_all_by_organization_name(&self, organization_name: &str)
    -> Result<Vec<Employee>>;

    // 发放记录
    async fn find_all_payments_by_organization_name(
        &self,
        organization_name: &str,
    ) -> Result<Vec<Payment>>;

    // 聚合
    async fn find_average_payment_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Decimal>>;
    async fn find_organization_average_payments(&self) -> Result<Vec<OrganizationAveragePayment>>;
    async fn find_employees_above_organization_average(
        &self,
    ) -> Result<Vec<EmployeeAveragePayment>>;
}
