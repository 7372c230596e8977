use crate::core::check::{CASES, run_checks};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};

/// Handle the `check` command
pub fn handle() -> AppResult<()> {
    header("Work-hours check table");

    let failed = run_checks();
    if failed > 0 {
        return Err(AppError::SelfCheck(failed));
    }

    success(format!("All {} cases passed", CASES.len()));
    Ok(())
}
