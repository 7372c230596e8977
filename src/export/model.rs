// src/export/model.rs

use crate::models::{EmployeeMonth, Period};

pub(crate) const SHEET_NAME: &str = "考勤统计";
pub(crate) const TITLE: &str = "考勤表-上下班工时统计表";
pub(crate) const COMPANY_PREFIX: &str = "公司名称：";
pub(crate) const PERIOD_PREFIX: &str = "时间段：";

pub(crate) const HEADER_NAME: &str = "员工姓名";
pub(crate) const HEADER_POSITION: &str = "岗位";
pub(crate) const HEADER_HOURS: &str = "工作时长";
pub(crate) const HEADER_HOURS_UNIT: &str = "(小时)";
pub(crate) const HEADER_TOTAL: &str = "累计时长";
pub(crate) const HEADER_REST: &str = "休息天数";
pub(crate) const HEADER_REMARK: &str = "备注";

pub(crate) const LABEL_CHECK_IN: &str = "签到";
pub(crate) const LABEL_CHECK_OUT: &str = "签退";
pub(crate) const REMARK_UNREADABLE: &str = "无法识别: ";

/// Everything written to the summary workbook.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub period: Period,
    pub company_name: String,
    pub missing_label: String,
    pub employees: Vec<EmployeeMonth>,
}

/// Row and column positions of the summary sheet (0-based).
pub(crate) struct Layout {
    pub days: u32,
}

impl Layout {
    pub const TITLE_ROW: u32 = 0;
    pub const COMPANY_ROW: u32 = 1;
    pub const PERIOD_ROW: u32 = 3;
    pub const HEADER_ROW: u32 = 5;
    pub const SUBHEADER_ROW: u32 = 6;
    pub const FIRST_EMPLOYEE_ROW: u32 = 7;

    pub const NAME_COL: u16 = 0;
    pub const POSITION_COL: u16 = 1;
    pub const KIND_COL: u16 = 2;
    const FIRST_DAY_COL: u16 = 3;

    pub fn new(days: u32) -> Self {
        Self { days }
    }

    /// Check-in / check-out column of a day (1-based day).
    pub fn punch_col(&self, day: u32) -> u16 {
        Self::FIRST_DAY_COL + ((day - 1) * 2) as u16
    }

    pub fn hours_col(&self, day: u32) -> u16 {
        self.punch_col(day) + 1
    }

    pub fn total_col(&self) -> u16 {
        Self::FIRST_DAY_COL + (self.days * 2) as u16
    }

    pub fn rest_col(&self) -> u16 {
        self.total_col() + 1
    }

    pub fn remark_col(&self) -> u16 {
        self.total_col() + 2
    }

    pub fn last_col(&self) -> u16 {
        self.remark_col()
    }

    /// First of the two rows of the n-th employee.
    pub fn employee_row(&self, index: usize) -> u32 {
        Self::FIRST_EMPLOYEE_ROW + (index as u32) * 2
    }
}

/// "3,17,28" style list for the remark column.
pub(crate) fn remark_for(month: &EmployeeMonth) -> String {
    if month.unreadable_days.is_empty() {
        return String::new();
    }
    let days: Vec<String> = month.unreadable_days.iter().map(u32::to_string).collect();
    format!("{REMARK_UNREADABLE}{}", days.join(","))
}
