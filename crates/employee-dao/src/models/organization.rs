//! 组织实体

use serde::{Deserialize, Serialize};

/// 组织
///
/// 名称在业务上唯一，但表结构不做约束
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i64,
    pub name: String,
}
