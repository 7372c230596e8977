pub mod cell;
pub mod day_summary;
pub mod employee;
pub mod period;

pub use cell::CellValue;
pub use day_summary::{DaySummary, EmployeeMonth};
pub use employee::{Employee, PunchRow};
pub use period::Period;
