//! Reading the roster and the punch sheet out of the source workbook.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, Employee, PunchRow};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::collections::BTreeMap;
use std::path::Path;

/// Everything the report needs from the source workbook.
#[derive(Debug, Default)]
pub struct SourceData {
    pub employees: Vec<Employee>,
    pub punches: Vec<PunchRow>,
}

impl SourceData {
    /// First punch row recorded under `name`.
    pub fn punch_row(&self, name: &str) -> Option<&PunchRow> {
        self.punches.iter().find(|r| r.name == name)
    }
}

pub fn read_source(path: &Path, cfg: &Config) -> AppResult<SourceData> {
    let mut workbook = open_workbook_auto(path)?;
    let sheets = workbook.sheet_names();

    for wanted in [&cfg.roster_sheet, &cfg.punch_sheet] {
        if !sheets.iter().any(|s| s == wanted) {
            return Err(AppError::SheetNotFound(wanted.clone()));
        }
    }

    let roster = workbook.worksheet_range(&cfg.roster_sheet)?;
    let punch = workbook.worksheet_range(&cfg.punch_sheet)?;

    Ok(SourceData {
        employees: read_roster(&roster, cfg.roster_first_row),
        punches: read_punch_rows(
            &punch,
            cfg.punch_group_row,
            cfg.punch_day_row,
            &cfg.punch_group_label,
        ),
    })
}

/// Employees listed from `first_row` down: name in column A, position in
/// column B. Rows without a name are skipped.
pub fn read_roster(range: &Range<Data>, first_row: u32) -> Vec<Employee> {
    let Some((last_row, _)) = range.end() else {
        return Vec::new();
    };

    (first_row..=last_row)
        .filter_map(|row| {
            let name = cell_text(range, row, 0)?;
            let position = cell_text(range, row, 1).unwrap_or_default();
            Some(Employee { name, position })
        })
        .collect()
}

/// Punch rows keyed by day of month.
///
/// Day columns sit under `group_label` in the group header row (labels
/// are carried right over merged cells) and carry the day number in the
/// day header row. Data rows follow the day header row, with the
/// employee name in column A.
pub fn read_punch_rows(
    range: &Range<Data>,
    group_row: u32,
    day_row: u32,
    group_label: &str,
) -> Vec<PunchRow> {
    let Some((last_row, last_col)) = range.end() else {
        return Vec::new();
    };

    let mut columns: Vec<(u32, u32)> = Vec::new();
    let mut group = String::new();

    for col in 0..=last_col {
        if let Some(label) = cell_text(range, group_row, col) {
            group = label;
        }
        if group != group_label {
            continue;
        }
        if let Some(day) = cell_text(range, day_row, col).and_then(|s| parse_day(&s)) {
            columns.push((col, day));
        }
    }

    ((day_row + 1)..=last_row)
        .filter_map(|row| {
            let name = cell_text(range, row, 0)?;
            let days: BTreeMap<u32, CellValue> = columns
                .iter()
                .map(|&(col, day)| (day, CellValue::from(range.get_value((row, col)))))
                .collect();
            Some(PunchRow { name, days })
        })
        .collect()
}

/// Trimmed text of a cell at absolute (row, col); None when empty.
fn cell_text(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    CellValue::from(range.get_value((row, col)))
        .as_punch_input()
        .map(|s| s.trim().to_string())
}

fn parse_day(s: &str) -> Option<u32> {
    let day: u32 = s.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}
