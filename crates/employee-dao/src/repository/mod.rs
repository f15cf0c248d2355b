//! 数据库仓储层
//!
//! 提供员工薪酬相关的只读数据访问，封装 SQL 细节。
//!
//! ## 设计原则
//!
//! - `EmployeeDao` 只借用调用方传入的连接，不持有任何状态
//! - `EmployeeRepository` 持有调用方创建的连接池，每次调用借出一个连接后委托给 `EmployeeDao`
//! - 事务控制由调用方决定
//! - 定义 trait 接口以支持 mock 测试

mod employee_dao;
mod employee_repo;
mod traits;

pub use employee_dao::EmployeeDao;
pub use employee_repo::EmployeeRepository;
pub use traits::*;
