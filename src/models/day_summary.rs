use crate::core::calculator::{DayOutcome, ReducedPunch};
use crate::models::employee::Employee;
use chrono::NaiveDate;

/// One calendar day of one employee.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub day: u32,
    pub punch: ReducedPunch,
    pub outcome: DayOutcome,
}

impl DaySummary {
    pub fn is_punched(&self) -> bool {
        self.punch.has_any()
    }
}

/// Monthly totals of one employee.
#[derive(Debug, Clone)]
pub struct EmployeeMonth {
    pub employee: Employee,
    /// False when the employee has no row in the punch sheet.
    pub found: bool,
    pub days: Vec<DaySummary>,
    pub total_hours: f64,
    pub work_days: u32,
    pub punched_days: u32,
    pub unreadable_days: Vec<u32>,
    /// Days with a check-in but no check-out.
    pub single_punch_days: Vec<u32>,
}

impl EmployeeMonth {
    pub fn empty(employee: Employee) -> Self {
        Self {
            employee,
            found: false,
            days: Vec::new(),
            total_hours: 0.0,
            work_days: 0,
            punched_days: 0,
            unreadable_days: Vec::new(),
            single_punch_days: Vec::new(),
        }
    }

    /// Fold one day into the totals.
    pub fn push(&mut self, day: DaySummary) {
        if day.is_punched() {
            self.punched_days += 1;
            if !day.punch.is_complete() {
                self.single_punch_days.push(day.day);
            }
        }
        match day.outcome {
            DayOutcome::Worked(h) => {
                self.total_hours += h;
                self.work_days += 1;
            }
            DayOutcome::Unreadable => self.unreadable_days.push(day.day),
            DayOutcome::Missing => {}
        }
        self.days.push(day);
    }

    pub fn rest_days(&self, days_in_month: u32) -> u32 {
        days_in_month.saturating_sub(self.work_days)
    }

    pub fn has_data(&self) -> bool {
        self.punched_days > 0
    }
}
