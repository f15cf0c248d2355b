//! 报表 DTO
//!
//! 报表程序以 JSON 形式输出这些结构

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Employee, EmployeeAveragePayment, OrganizationAveragePayment};

/// 发放明细行
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLineDto {
    pub payment_id: i64,
    pub receiver_id: i64,
    /// 接收人全名；接收人不在本组织员工列表中时为空
    pub receiver_name: Option<String>,
    pub amount: Decimal,
}

/// 单个组织的报表
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationReportDto {
    pub organization_name: String,
    pub employees: Vec<Employee>,
    /// 按接收人名字、金额升序
    pub payments: Vec<PaymentLineDto>,
    pub payment_count: usize,
    pub payment_total: Decimal,
}

/// 全局薪酬概览
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollOverviewDto {
    pub employee_count: usize,
    pub organization_averages: Vec<OrganizationAveragePayment>,
    pub above_organization_average: Vec<EmployeeAveragePayment>,
    /// 按生日升序的前 N 个员工
    pub oldest_employees: Vec<Employee>,
}

/// 员工平均发放额
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAverageDto {
    pub first_name: String,
    pub last_name: String,
    /// 没有任何发放记录时为空
    pub average_amount: Option<Decimal>,
}
