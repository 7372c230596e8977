use crate::core::calculator::calendar::{days_in, month_dates};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fmt;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// A validated reporting month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(AppError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> u32 {
        days_in(self.year, self.month)
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        month_dates(self.year, self.month)
    }

    /// "2025年6月1日-2025年6月30日"
    pub fn label(&self) -> String {
        format!(
            "{y}年{m}月1日-{y}年{m}月{last}日",
            y = self.year,
            m = self.month,
            last = self.days()
        )
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}月", self.year, self.month)
    }
}
