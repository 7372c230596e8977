// src/export/xlsx.rs

use crate::core::calculator::calendar::weekday_name;
use crate::errors::AppResult;
use crate::export::model::{
    COMPANY_PREFIX, HEADER_HOURS, HEADER_HOURS_UNIT, HEADER_NAME, HEADER_POSITION, HEADER_REMARK,
    HEADER_REST, HEADER_TOTAL, LABEL_CHECK_IN, LABEL_CHECK_OUT, Layout, MonthReport,
    PERIOD_PREFIX, SHEET_NAME, TITLE, remark_for,
};
use crate::export::notify_export_success;
use crate::models::EmployeeMonth;
use crate::ui::messages::info;
use chrono::Datelike;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HOURS_FORMAT: &str = "0.00";

/// Cell formats of the summary sheet, all sharing one font family.
struct Styles {
    title: Format,
    note: Format,
    header: Format,
    cell: Format,
    hours: Format,
}

impl Styles {
    fn new(font: &str) -> Self {
        let centered = |f: Format| f.set_align(FormatAlign::Center).set_align(FormatAlign::VerticalCenter);

        let cell = centered(
            Format::new()
                .set_font_name(font)
                .set_font_size(9)
                .set_border(FormatBorder::Thin),
        );

        Self {
            title: centered(Format::new().set_font_name(font).set_font_size(16).set_bold()),
            note: Format::new()
                .set_font_name(font)
                .set_font_size(9)
                .set_align(FormatAlign::Left),
            header: centered(
                Format::new()
                    .set_font_name(font)
                    .set_font_size(12)
                    .set_bold()
                    .set_background_color(Color::RGB(0xCCCCCC))
                    .set_pattern(FormatPattern::Solid)
                    .set_border(FormatBorder::Thin),
            ),
            hours: cell.clone().set_num_format(HOURS_FORMAT),
            cell,
        }
    }
}

/// Write the monthly summary workbook.
pub(crate) fn export_xlsx(report: &MonthReport, font: &str, path: &Path) -> AppResult<()> {
    info(format!("Writing summary workbook: {}", path.display()));

    let layout = Layout::new(report.period.days());
    let styles = Styles::new(font);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    write_banner(worksheet, report, &layout, &styles)?;
    write_headers(worksheet, report, &layout, &styles)?;

    for (index, month) in report.employees.iter().enumerate() {
        write_employee(worksheet, report, month, layout.employee_row(index), &layout, &styles)?;
    }

    set_widths(worksheet, report, &layout)?;
    worksheet.set_freeze_panes(Layout::FIRST_EMPLOYEE_ROW, Layout::KIND_COL + 1)?;

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

// ---------------------------
// Title, company, period
// ---------------------------
fn write_banner(
    ws: &mut Worksheet,
    report: &MonthReport,
    layout: &Layout,
    styles: &Styles,
) -> AppResult<()> {
    let last = layout.last_col();

    ws.merge_range(Layout::TITLE_ROW, 0, Layout::TITLE_ROW, last, TITLE, &styles.title)?;
    ws.merge_range(
        Layout::COMPANY_ROW,
        0,
        Layout::COMPANY_ROW,
        last,
        &format!("{COMPANY_PREFIX}{}", report.company_name),
        &styles.note,
    )?;
    ws.write_string_with_format(
        Layout::PERIOD_ROW,
        0,
        format!("{PERIOD_PREFIX}{}", report.period.label()),
        &styles.note,
    )?;

    Ok(())
}

// ---------------------------
// Two header rows
// ---------------------------
fn write_headers(
    ws: &mut Worksheet,
    report: &MonthReport,
    layout: &Layout,
    styles: &Styles,
) -> AppResult<()> {
    let (top, bottom) = (Layout::HEADER_ROW, Layout::SUBHEADER_ROW);
    let header = |ws: &mut Worksheet, col: u16, upper: &str, lower: &str| -> AppResult<()> {
        ws.write_string_with_format(top, col, upper, &styles.header)?;
        ws.write_string_with_format(bottom, col, lower, &styles.header)?;
        Ok(())
    };

    header(ws, Layout::NAME_COL, HEADER_NAME, "")?;
    header(ws, Layout::POSITION_COL, HEADER_POSITION, "")?;
    header(ws, Layout::KIND_COL, "", "")?;

    for date in report.period.dates() {
        let day = date.day();
        let day_label = format!("{}月{}日", date.month(), day);
        header(ws, layout.punch_col(day), weekday_name(date), &day_label)?;
        header(ws, layout.hours_col(day), HEADER_HOURS, HEADER_HOURS_UNIT)?;
    }

    header(ws, layout.total_col(), HEADER_TOTAL, "")?;
    header(ws, layout.rest_col(), HEADER_REST, "")?;
    header(ws, layout.remark_col(), HEADER_REMARK, "")?;

    Ok(())
}

// ---------------------------
// Employee row pair
// ---------------------------
fn write_employee(
    ws: &mut Worksheet,
    report: &MonthReport,
    month: &EmployeeMonth,
    row: u32,
    layout: &Layout,
    styles: &Styles,
) -> AppResult<()> {
    let next = row + 1;
    let days = report.period.days();

    ws.merge_range(row, Layout::NAME_COL, next, Layout::NAME_COL, &month.employee.name, &styles.cell)?;
    ws.merge_range(
        row,
        Layout::POSITION_COL,
        next,
        Layout::POSITION_COL,
        &month.employee.position,
        &styles.cell,
    )?;
    ws.write_string_with_format(row, Layout::KIND_COL, LABEL_CHECK_IN, &styles.cell)?;
    ws.write_string_with_format(next, Layout::KIND_COL, LABEL_CHECK_OUT, &styles.cell)?;

    // Employees missing from the punch sheet keep an empty, styled grid
    for day in 1..=days {
        let col = layout.punch_col(day);
        ws.write_blank(row, col, &styles.cell)?;
        ws.write_blank(next, col, &styles.cell)?;
        ws.merge_range(row, col + 1, next, col + 1, "", &styles.cell)?;
    }

    for summary in &month.days {
        let col = layout.punch_col(summary.day);
        let missing = report.missing_label.as_str();

        ws.write_string_with_format(row, col, summary.punch.check_in().unwrap_or(missing), &styles.cell)?;
        ws.write_string_with_format(next, col, summary.punch.check_out().unwrap_or(missing), &styles.cell)?;

        if summary.outcome.is_worked() {
            ws.write_number_with_format(row, col + 1, summary.outcome.hours(), &styles.hours)?;
        }
    }

    ws.merge_range(row, layout.total_col(), next, layout.total_col(), "", &styles.hours)?;
    ws.merge_range(row, layout.rest_col(), next, layout.rest_col(), "", &styles.cell)?;
    ws.merge_range(row, layout.remark_col(), next, layout.remark_col(), &remark_for(month), &styles.cell)?;

    if month.has_data() {
        ws.write_number_with_format(row, layout.total_col(), month.total_hours, &styles.hours)?;
        ws.write_number_with_format(row, layout.rest_col(), month.rest_days(days) as f64, &styles.cell)?;
    }

    Ok(())
}

// ---------------------------
// Column widths
// ---------------------------
fn set_widths(ws: &mut Worksheet, report: &MonthReport, layout: &Layout) -> AppResult<()> {
    let names = report.employees.iter().map(|m| m.employee.name.as_str());
    let positions = report.employees.iter().map(|m| m.employee.position.as_str());

    let name_width = widest(names).max(10) + 2;
    let position_width = widest(positions).max(10) + 2;

    ws.set_column_width(Layout::NAME_COL, name_width as f64)?;
    ws.set_column_width(Layout::POSITION_COL, position_width as f64)?;
    ws.set_column_width(Layout::KIND_COL, 12)?;

    for day in 1..=report.period.days() {
        ws.set_column_width(layout.punch_col(day), 10)?;
        ws.set_column_width(layout.hours_col(day), 8)?;
    }

    ws.set_column_width(layout.total_col(), 10)?;
    ws.set_column_width(layout.rest_col(), 10)?;
    ws.set_column_width(layout.remark_col(), 20)?;

    Ok(())
}

fn widest<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}
