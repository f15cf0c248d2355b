//! 员工实体

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 员工
///
/// 对应 employees 表，最多属于一个组织（organization_id 可为空）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<NaiveDate>,
    /// 所属组织 ID
    pub organization_id: Option<i64>,
}

impl Employee {
    /// 名字 + 姓氏
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
