//! 聚合查询结果
//!
//! 平均值由数据库对 NUMERIC 求 AVG 后保留 10 位小数返回，
//! 解码后去掉尾随零（200.0000000000 -> 200）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::Employee;

/// 组织平均发放额
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationAveragePayment {
    pub organization_name: String,
    pub average_amount: Decimal,
}

impl OrganizationAveragePayment {
    /// 去掉平均值的尾随零
    pub fn normalized(self) -> Self {
        Self {
            average_amount: self.average_amount.normalize(),
            ..self
        }
    }
}

/// 员工及其个人平均发放额
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAveragePayment {
    #[sqlx(flatten)]
    pub employee: Employee,
    pub average_amount: Decimal,
}

impl EmployeeAveragePayment {
    /// 去掉平均值的尾随零
    pub fn normalized(self) -> Self {
        Self {
            average_amount: self.average_amount.normalize(),
            ..self
        }
    }
}

impl From<EmployeeAveragePayment> for (Employee, Decimal) {
    fn from(row: EmployeeAveragePayment) -> Self {
        (row.employee, row.average_amount)
    }
}
