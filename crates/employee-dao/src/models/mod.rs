//! 薪酬领域模型
//!
//! 包含员工、组织、发放记录三类实体以及聚合查询的结果行

pub mod aggregate;
pub mod employee;
pub mod organization;
pub mod payment;

// 重新导出常用类型
pub use aggregate::{EmployeeAveragePayment, OrganizationAveragePayment};
pub use employee::Employee;
pub use organization::Organization;
pub use payment::Payment;
