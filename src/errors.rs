//! Unified application error type.
//! The report driver, the source reader, the exporter and the CLI return
//! AppError. The core calculators never fail: bad input degrades to a
//! tagged outcome instead.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbooks
    // ---------------------------
    #[error("Cannot read workbook: {0}")]
    ReadWorkbook(#[from] calamine::Error),

    #[error("Cannot write workbook: {0}")]
    WriteWorkbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Sheet not found in source workbook: {0}")]
    SheetNotFound(String),

    // ---------------------------
    // Source discovery
    // ---------------------------
    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    #[error("Invalid file name pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Cannot determine year/month: {0}")]
    UnknownPeriod(String),

    // ---------------------------
    // Period validation
    // ---------------------------
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Year must be between 1900 and 2100, got {0}")]
    InvalidYear(i32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Output cancelled: existing file not overwritten ({0})")]
    OutputCancelled(String),

    // ---------------------------
    // Self-check
    // ---------------------------
    #[error("Self-check failed: {0} case(s) off")]
    SelfCheck(usize),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
