//! 员工查询门面
//!
//! 每个方法借用调用方持有的连接，执行一条只读 SQL，返回强类型结果。
//! 连接的打开、关闭以及事务边界均由调用方负责。

use std::future::Future;
use std::time::Instant;

use payroll_shared::observability::metrics::record_query;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use tracing::{debug, instrument, warn};

use crate::error::{DaoError, Result};
use crate::models::{Employee, EmployeeAveragePayment, OrganizationAveragePayment, Payment};

/// 员工查询门面
///
/// 无状态值，由调用方显式构造并注入，复制成本为零
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeDao;

impl EmployeeDao {
    pub const fn new() -> Self {
        Self
    }

    // ==================== 员工列表 ====================

    /// 返回全部员工，不保证顺序
    #[instrument(skip(self, conn))]
    pub async fn find_all(&self, conn: &mut PgConnection) -> Result<Vec<Employee>> {
        observe(
            "find_all",
            sqlx::query_as::<_, Employee>(
                r#"
                SELECT id, first_name, last_name, birthday, organization_id
                FROM employees
                "#,
            )
            .fetch_all(conn),
        )
        .await
    }

    /// 返回名字完全匹配的员工
    #[instrument(skip(self, conn))]
    pub async fn find_all_by_first_name(
        &self,
        conn: &mut PgConnection,
        first_name: &str,
    ) -> Result<Vec<Employee>> {
        validate_text("first_name", first_name)?;

        observe(
            "find_all_by_first_name",
            sqlx::query_as::<_, Employee>(
                r#"
                SELECT id, first_name, last_name, birthday, organization_id
                FROM employees
                WHERE first_name = $1
                "#,
            )
            .bind(first_name)
            .fetch_all(conn),
        )
        .await
    }

    /// 按生日升序返回前 limit 个员工
    ///
    /// 生日为空的员工排在最后；生日相同时顺序由数据库决定
    #[instrument(skip(self, conn))]
    pub async fn find_limited_ordered_by_birthday(
        &self,
        conn: &mut PgConnection,
        limit: i64,
    ) -> Result<Vec<Employee>> {
        validate_limit(limit)?;

        observe(
            "find_limited_ordered_by_birthday",
            sqlx::query_as::<_, Employee>(
                r#"
                SELECT id, first_name, last_name, birthday, organization_id
                FROM employees
                ORDER BY birthday ASC NULLS LAST
                LIMIT $1
                "#,
            )
            .bind(limit)
            .fetch_all(conn),
        )
        .await
    }

    /// 返回所属组织名称完全匹配的员工
    #[instrument(skip(self, conn))]
    pub async fn find_all_by_organization_name(
        &self,
        conn: &mut PgConnection,
        organization_name: &str,
    ) -> Result<Vec<Employee>> {
        validate_text("organization_name", organization_name)?;

        observe(
            "find_all_by_organization_name",
            sqlx::query_as::<_, Employee>(
                r#"
                SELECT e.id, e.first_name, e.last_name, e.birthday, e.organization_id
                FROM employees e
                JOIN organizations o ON o.id = e.organization_id
                WHERE o.name = $1
                "#,
            )
            .bind(organization_name)
            .fetch_all(conn),
        )
        .await
    }

    // ==================== 发放记录 ====================

    /// 返回指定组织员工收到的全部发放记录
    ///
    /// 按接收人名字升序、金额升序排列，二者相同时按记录 ID 保证稳定
    #[instrument(skip(self, conn))]
    pub async fn find_all_payments_by_organization_name(
        &self,
        conn: &mut PgConnection,
        organization_name: &str,
    ) -> Result<Vec<Payment>> {
        validate_text("organization_name", organization_name)?;

        observe(
            "find_all_payments_by_organization_name",
            sqlx::query_as::<_, Payment>(
                r#"
                SELECT p.id, p.amount, p.receiver_id
                FROM payments p
                JOIN employees e ON e.id = p.receiver_id
                JOIN organizations o ON o.id = e.organization_id
                WHERE o.name = $1
                ORDER BY e.first_name ASC, p.amount ASC, p.id ASC
                "#,
            )
            .bind(organization_name)
            .fetch_all(conn),
        )
        .await
    }

    // ==================== 聚合 ====================

    /// 返回名字和姓氏都匹配的员工收到的平均发放额
    ///
    /// 没有匹配记录时返回 `None`
    #[instrument(skip(self, conn))]
    pub async fn find_average_payment_by_full_name(
        &self,
        conn: &mut PgConnection,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Decimal>> {
        validate_text("first_name", first_name)?;
        validate_text("last_name", last_name)?;

        observe(
            "find_average_payment_by_full_name",
            sqlx::query_scalar::<_, Option<Decimal>>(
                r#"
                SELECT ROUND(AVG(p.amount), 10)
                FROM payments p
                JOIN employees e ON e.id = p.receiver_id
                WHERE e.first_name = $1 AND e.last_name = $2
                "#,
            )
            .bind(first_name)
            .bind(last_name)
            .fetch_one(conn),
        )
        .await
        .map(|average| average.map(|amount| amount.normalize()))
    }

    /// 返回每个组织的平均发放额，按组织名称升序
    ///
    /// 没有任何发放记录的组织不出现在结果中
    #[instrument(skip(self, conn))]
    pub async fn find_organization_average_payments(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Vec<OrganizationAveragePayment>> {
        observe(
            "find_organization_average_payments",
            sqlx::query_as::<_, OrganizationAveragePayment>(
                r#"
                SELECT o.name AS organization_name,
                       ROUND(AVG(p.amount), 10) AS average_amount
                FROM payments p
                JOIN employees e ON e.id = p.receiver_id
                JOIN organizations o ON o.id = e.organization_id
                GROUP BY o.id, o.name
                ORDER BY o.name ASC, o.id ASC
                "#,
            )
            .fetch_all(conn),
        )
        .await
        .map(|rows| rows.into_iter().map(OrganizationAveragePayment::normalized).collect())
    }

    /// 返回个人平均发放额严格高于所在组织平均发放额的员工，按名字升序
    ///
    /// 组织平均值对该组织全部员工的全部发放记录求平均，与个人平均值分别计算；
    /// 没有所属组织的员工不参与比较
    #[instrument(skip(self, conn))]
    pub async fn find_employees_above_organization_average(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Vec<EmployeeAveragePayment>> {
        observe(
            "find_employees_above_organization_average",
            sqlx::query_as::<_, EmployeeAveragePayment>(
                r#"
                WITH employee_avg AS (
                    SELECT p.receiver_id, AVG(p.amount) AS average_amount
                    FROM payments p
                    GROUP BY p.receiver_id
                ),
                organization_avg AS (
                    SELECT e.organization_id, AVG(p.amount) AS average_amount
                    FROM payments p
                    JOIN employees e ON e.id = p.receiver_id
                    WHERE e.organization_id IS NOT NULL
                    GROUP BY e.organization_id
                )
                SELECT e.id, e.first_name, e.last_name, e.birthday, e.organization_id,
                       ROUND(ea.average_amount, 10) AS average_amount
                FROM employee_avg ea
                JOIN employees e ON e.id = ea.receiver_id
                JOIN organization_avg oa ON oa.organization_id = e.organization_id
                WHERE ea.average_amount > oa.average_amount
                ORDER BY e.first_name ASC, e.id ASC
                "#,
            )
            .fetch_all(conn),
        )
        .await
        .map(|rows| rows.into_iter().map(EmployeeAveragePayment::normalized).collect())
    }
}

/// 执行查询并记录耗时、结果与错误分类
async fn observe<T, F>(query: &'static str, fut: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, sqlx::Error>>,
{
    let started = Instant::now();
    let outcome = fut.await;
    let elapsed = started.elapsed();
    record_query(query, outcome.is_ok(), elapsed.as_secs_f64());

    match outcome {
        Ok(value) => {
            debug!(query, elapsed_ms = elapsed.as_millis() as u64, "Query finished");
            Ok(value)
        }
        Err(e) => {
            let err = DaoError::from(e);
            warn!(query, code = err.error_code(), error = %err, "Query failed");
            Err(err)
        }
    }
}

/// 行数上限必须非负
fn validate_limit(limit: i64) -> Result<()> {
    if limit < 0 {
        return Err(DaoError::parameter(
            "limit",
            format!("must be non-negative, got {}", limit),
        ));
    }
    Ok(())
}

/// PostgreSQL 的 text 类型不能包含 NUL 字符
fn validate_text(name: &'static str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(DaoError::parameter(name, "must not contain NUL characters"));
    }
    Ok(())
}
