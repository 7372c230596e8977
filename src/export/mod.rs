// src/export/mod.rs

mod fs_utils;
mod model;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use model::MonthReport;

use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Common completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Write the summary workbook for `report` to `path`.
pub fn write_report(report: &MonthReport, font: &str, path: &Path) -> AppResult<()> {
    xlsx::export_xlsx(report, font, path)
}
