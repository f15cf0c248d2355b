//! 发放记录实体

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 一笔发放给员工的款项
///
/// 所属组织即接收人所属组织
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    /// 定点小数金额，对应 NUMERIC(19, 2)
    pub amount: Decimal,
    /// 接收人（员工）ID
    pub receiver_id: i64,
}
