use crate::config::Config;
use crate::core::calculator::WorkHoursCalculator;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::{MonthReport, ensure_writable, write_report};
use crate::models::{EmployeeMonth, Period};
use crate::source::{find_source_file, period_from_filename, read_source};
use crate::ui::messages::{info, warning};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Options of the `build` command.
#[derive(Debug, Default, Clone)]
pub struct BuildOptions {
    pub input: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub force: bool,
    pub verbose: bool,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Generate the monthly summary workbook and return its path.
    pub fn build(opts: &BuildOptions, cfg: &Config) -> AppResult<PathBuf> {
        let pattern = Regex::new(&cfg.source_pattern)?;
        let dir = opts.dir.clone().unwrap_or_else(|| PathBuf::from("."));

        let source = resolve_source(opts.input.as_deref(), &dir, &pattern)?;
        info(format!("Source workbook: {}", source.display()));

        let period = resolve_period(&source, opts, &pattern)?;
        info(format!("Period: {} ({} days)", period, period.days()));

        let data = read_source(&source, cfg)?;
        info(format!("Employees in roster: {}", data.employees.len()));

        let calc = WorkHoursCalculator::new(cfg.decimal_notation, cfg.punch_policy);

        let employees: Vec<EmployeeMonth> = data
            .employees
            .iter()
            .map(|e| {
                let month = Core::summarize_month(e, data.punch_row(&e.name), &period, &calc);
                report_employee(&month, opts.verbose);
                month
            })
            .collect();

        let output = opts
            .output
            .clone()
            .unwrap_or_else(|| dir.join(cfg.output_file_name(period.year(), period.month())));
        ensure_writable(&output, opts.force)?;

        let report = MonthReport {
            period,
            company_name: cfg.company_name.clone(),
            missing_label: cfg.missing_label.clone(),
            employees,
        };
        write_report(&report, &cfg.font_name, &output)?;

        let punched: u32 = report.employees.iter().map(|m| m.punched_days).sum();
        info(format!(
            "{} employees, {} days, {} punched day records",
            report.employees.len(),
            period.days(),
            punched
        ));

        Ok(output)
    }
}

fn resolve_source(input: Option<&Path>, dir: &Path, pattern: &Regex) -> AppResult<PathBuf> {
    if let Some(path) = input {
        if !path.exists() {
            return Err(AppError::SourceNotFound(path.display().to_string()));
        }
        return Ok(path.to_path_buf());
    }

    find_source_file(dir, pattern)?.ok_or_else(|| {
        AppError::SourceNotFound(format!(
            "no file matching '{}' in {}",
            pattern.as_str(),
            dir.display()
        ))
    })
}

/// Explicit year/month win; whatever is missing comes from the file name.
fn resolve_period(source: &Path, opts: &BuildOptions, pattern: &Regex) -> AppResult<Period> {
    let from_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| period_from_filename(n, pattern));

    let year = opts.year.or(from_name.map(|(y, _)| y));
    let month = opts.month.or(from_name.map(|(_, m)| m));

    match (year, month) {
        (Some(y), Some(m)) => Period::new(y, m),
        _ => Err(AppError::UnknownPeriod(format!(
            "pass --year and --month or use a file name like '考勤表-上下班工时统计表2025年6月.xlsx' ({})",
            source.display()
        ))),
    }
}

fn report_employee(month: &EmployeeMonth, verbose: bool) {
    let name = &month.employee.name;

    if !month.found {
        warning(format!("{name}: no row in the punch sheet, left blank"));
        return;
    }

    if verbose {
        for day in month.days.iter().filter(|d| d.is_punched()) {
            info(format!(
                "{name} {}: in {} out {} → {}",
                day.date,
                day.punch.check_in().unwrap_or("--:--"),
                day.punch.check_out().unwrap_or("--:--"),
                day.outcome.label()
            ));
        }
    }

    if month.has_data() {
        info(format!(
            "{name}: {:.2} h over {} work days ({} punched)",
            month.total_hours, month.work_days, month.punched_days
        ));
    }

    if !month.single_punch_days.is_empty() {
        warning(format!(
            "{name}: single punch on day(s) {:?}",
            month.single_punch_days
        ));
    }

    if !month.unreadable_days.is_empty() {
        warning(format!(
            "{name}: unreadable punches on day(s) {:?}",
            month.unreadable_days
        ));
    }
}
