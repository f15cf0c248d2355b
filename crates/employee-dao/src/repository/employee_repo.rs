//! 员工薪酬仓储
//!
//! 基于调用方创建的连接池实现 `EmployeeRepositoryTrait`

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::pool::PoolConnection;
use sqlx::postgres::Postgres;

use super::employee_dao::EmployeeDao;
use super::traits::EmployeeRepositoryTrait;
use crate::error::Result;
use crate::models::{Employee, EmployeeAveragePayment, OrganizationAveragePayment, Payment};

/// 员工薪酬仓储
///
/// 每次调用从连接池借出一个连接，查询结束即归还；不缓存、不重试
pub struct EmployeeRepository {
    pool: PgPool,
    dao: EmployeeDao,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            dao: EmployeeDao::new(),
        }
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        Ok(self.pool.acquire().await?)
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for EmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let mut conn = self.acquire().await?;
        self.dao.find_all(&mut conn).await
    }

    async fn find_all_by_first_name(&self, first_name: &str) -> Result<Vec<Employee>> {
        let mut conn = self.acquire().await?;
        self.dao.find_all_by_first_name(&mut conn, first_name).await
    }

    async fn find_limited_ordered_by_birthday(&self, limit: i64) -> Result<Vec<Employee>> {
        let mut conn = self.acquire().await?;
        self.dao
            .find_limited_ordered_by_birthday(&mut conn, limit)
            .await
    }

    async fn find_all_by_organization_name(
        &self,
        organization_name: &str,
    ) -> Result<Vec<Employee>> {
        let mut conn = self.acquire().await?;
        self.dao
            .find_all_by_organization_name(&mut conn, organization_name)
            .await
    }

    async fn find_all_payments_by_organization_name(
        &self,
        organization_name: &str,
    ) -> Result<Vec<Payment>> {
        let mut conn = self.acquire().await?;
        self.dao
            .find_all_payments_by_organization_name(&mut conn, organization_name)
            .await
    }

    async fn find_average_payment_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Decimal>> {
        let mut conn = self.acquire().await?;
        self.dao
            .find_average_payment_by_full_name(&mut conn, first_name, last_name)
            .await
    }

    async fn find_organization_average_payments(&self) -> Result<Vec<OrganizationAveragePayment>> {
        let mut conn = self.acquire().await?;
        self.dao.find_organization_average_payments(&mut conn).await
    }

    async fn find_employees_above_organization_average(
        &self,
    ) -> Result<Vec<EmployeeAveragePayment>> {
        let mut conn = self.acquire().await?;
        self.dao
            .find_employees_above_organization_average(&mut conn)
            .await
    }
}
