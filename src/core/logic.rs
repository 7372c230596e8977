use crate::core::calculator::WorkHoursCalculator;
use crate::models::{DaySummary, Employee, EmployeeMonth, Period, PunchRow};
use chrono::Datelike;

pub struct Core;

impl Core {
    /// Walk every day of the period for one employee and fold the results.
    ///
    /// An employee without a punch row is returned empty and marked as not
    /// found; the caller decides how to report it.
    pub fn summarize_month(
        employee: &Employee,
        row: Option<&PunchRow>,
        period: &Period,
        calc: &WorkHoursCalculator,
    ) -> EmployeeMonth {
        let mut month = EmployeeMonth::empty(employee.clone());

        let Some(row) = row else {
            return month;
        };
        month.found = true;

        for date in period.dates() {
            let day = date.day();
            let (punch, outcome) = calc.evaluate_cell(row.cell(day).as_punch_input());

            month.push(DaySummary {
                date,
                day,
                punch,
                outcome,
            });
        }

        month
    }
}
