//! Locating the monthly source workbook and reading its period from the
//! file name.

use crate::errors::AppResult;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Year and month encoded in a source file name, if it matches `pattern`.
///
/// The pattern must capture the year first and the month second.
pub fn period_from_filename(name: &str, pattern: &Regex) -> Option<(i32, u32)> {
    let caps = pattern.captures(name)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    Some((year, month))
}

/// First file in `dir` (by name) whose file name matches `pattern`.
pub fn find_source_file(dir: &Path, pattern: &Regex) -> AppResult<Option<PathBuf>> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| pattern.is_match(n))
        })
        .collect();

    candidates.sort();
    Ok(candidates.into_iter().next())
}
