mod common;
use common::{SOURCE_NAME, june_fixture, temp_dir};
use punchsheet::config::Config;
use punchsheet::errors::AppError;
use punchsheet::models::CellValue;
use punchsheet::source::{find_source_file, period_from_filename, read_source};
use regex::Regex;
use std::fs;

fn default_pattern() -> Regex {
    Regex::new(&Config::default().source_pattern).unwrap()
}

#[test]
fn test_period_from_filename() {
    let re = default_pattern();
    assert_eq!(period_from_filename(SOURCE_NAME, &re), Some((2025, 6)));
    assert_eq!(
        period_from_filename("考勤表-上下班工时统计表2024年12月(导出).xlsx", &re),
        Some((2024, 12))
    );
    assert_eq!(period_from_filename("attendance.xlsx", &re), None);
    assert_eq!(period_from_filename("考勤表-上下班工时统计表2025年6月.xls", &re), None);
}

#[test]
fn test_find_source_file_picks_first_match() {
    let dir = temp_dir("find_source");
    fs::write(dir.join("notes.xlsx"), b"x").unwrap();
    fs::write(dir.join("考勤表-上下班工时统计表2025年7月.xlsx"), b"x").unwrap();
    fs::write(dir.join("考勤表-上下班工时统计表2025年6月.xlsx"), b"x").unwrap();

    let found = find_source_file(&dir, &default_pattern()).unwrap().unwrap();
    assert_eq!(found.file_name().unwrap().to_str().unwrap(), SOURCE_NAME);
}

#[test]
fn test_find_source_file_none_when_nothing_matches() {
    let dir = temp_dir("find_source_none");
    fs::write(dir.join("notes.xlsx"), b"x").unwrap();
    assert!(find_source_file(&dir, &default_pattern()).unwrap().is_none());
}

#[test]
fn test_read_roster_and_punches() {
    let dir = temp_dir("read_source");
    let path = june_fixture(&dir);

    let data = read_source(&path, &Config::default()).unwrap();

    let names: Vec<&str> = data.employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["张三", "李四", "王五", "赵六"]);
    assert_eq!(data.employees[0].position, "工程师");
    assert_eq!(data.employees[1].position, "");

    let zhang = data.punch_row("张三").expect("row for 张三");
    assert_eq!(zhang.days.len(), 30);
    assert_eq!(zhang.cell(1), &CellValue::Text("08:30\n18:30".into()));
    assert_eq!(zhang.cell(6), &CellValue::Absent);
    // the "统计" group next to the punch days is not a day column
    assert_ne!(zhang.cell(1), &CellValue::Text("99:99".into()));

    assert!(data.punch_row("赵六").is_none());
    assert!(data.punch_row("孙七").is_some());
}

#[test]
fn test_missing_sheet_is_reported() {
    let dir = temp_dir("read_source_sheet");
    let path = june_fixture(&dir);

    let cfg = Config {
        punch_sheet: "Punches".into(),
        ..Config::default()
    };
    let err = read_source(&path, &cfg).unwrap_err();
    assert!(matches!(err, AppError::SheetNotFound(name) if name == "Punches"));
}
