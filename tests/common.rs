#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Range, Reader, open_workbook_auto};
use rust_xlsxwriter::{Format, Workbook};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const SOURCE_NAME: &str = "考勤表-上下班工时统计表2025年6月.xlsx";
pub const OUTPUT_NAME: &str = "2025年6月员工考勤统计表.xlsx";

pub fn psh() -> Command {
    cargo_bin_cmd!("punchsheet")
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("punchsheet_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Config path that does not exist, so defaults are used
pub fn no_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

/// Punch cells of one punch-sheet row: employee name and (day, raw cell)
pub type PunchLine<'a> = (&'a str, &'a [(u32, &'a str)]);

/// Write a source workbook laid out like the punch-clock export:
/// roster sheet with two header rows (6-7) and (name, position) from row 8,
/// punch sheet with the merged "打卡时间" group on row 3 and day numbers on
/// row 4, plus an unrelated group to the right that must be ignored.
pub fn write_source(path: &Path, days: u32, roster: &[(&str, &str)], punches: &[PunchLine]) {
    let mut workbook = Workbook::new();
    let plain = Format::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("考勤统计").unwrap();
    sheet.write(0, 0, "考勤统计表").unwrap();
    sheet.write(5, 0, "姓名").unwrap();
    sheet.write(5, 1, "岗位").unwrap();
    for (i, (name, position)) in roster.iter().enumerate() {
        let row = 7 + i as u32;
        sheet.write(row, 0, *name).unwrap();
        if !position.is_empty() {
            sheet.write(row, 1, *position).unwrap();
        }
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("打卡时间").unwrap();
    sheet.write(0, 0, "打卡时间表").unwrap();
    sheet.write(2, 0, "姓名").unwrap();
    sheet
        .merge_range(2, 1, 2, days as u16, "打卡时间", &plain)
        .unwrap();
    for day in 1..=days {
        sheet.write(3, day as u16, day as f64).unwrap();
    }
    let extra = days as u16 + 1;
    sheet.write(2, extra, "统计").unwrap();
    sheet.write(3, extra, 1.0).unwrap();

    for (i, (name, cells)) in punches.iter().enumerate() {
        let row = 4 + i as u32;
        sheet.write(row, 0, *name).unwrap();
        for (day, raw) in cells.iter() {
            sheet.write(row, *day as u16, *raw).unwrap();
        }
        sheet.write(row, extra, "99:99").unwrap();
    }

    workbook.save(path).unwrap();
}

/// June 2025 fixture used by several tests:
/// - 张三: full, multi-punch, single, overnight and unreadable days
/// - 李四: no position, a shift starting at midnight
/// - 王五: present in the punch sheet without any punch
/// - 赵六: missing from the punch sheet
/// - 孙七: only in the punch sheet, not in the roster
pub fn june_fixture(dir: &Path) -> PathBuf {
    let path = dir.join(SOURCE_NAME);
    write_source(
        &path,
        30,
        &[
            ("张三", "工程师"),
            ("李四", ""),
            ("王五", "会计"),
            ("赵六", "司机"),
        ],
        &[
            (
                "张三",
                &[
                    (1, "08:30\n18:30"),
                    (2, "09:00\n12:00\n13:00\n17:00"),
                    (3, "08:45"),
                    (4, "22:00\n06:00"),
                    (5, "8:00\nabc"),
                ],
            ),
            ("李四", &[(10, "00:00\n08:00")]),
            ("王五", &[]),
            ("孙七", &[(1, "07:00\n19:00")]),
        ],
    );
    path
}

/// Read one sheet of a workbook
pub fn read_sheet(path: &Path, sheet: &str) -> Range<Data> {
    let mut wb = open_workbook_auto(path).expect("open workbook");
    wb.worksheet_range(sheet).expect("read sheet")
}

pub fn text_at(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

pub fn number_at(range: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        _ => None,
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}
