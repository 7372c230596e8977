use crate::models::cell::CellValue;
use std::collections::BTreeMap;

/// Roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub position: String,
}

/// One row of the punch sheet: raw cells keyed by day of month.
#[derive(Debug, Clone, Default)]
pub struct PunchRow {
    pub name: String,
    pub days: BTreeMap<u32, CellValue>,
}

impl PunchRow {
    pub fn cell(&self, day: u32) -> &CellValue {
        static ABSENT: CellValue = CellValue::Absent;
        self.days.get(&day).unwrap_or(&ABSENT)
    }
}
