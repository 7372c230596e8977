//! Work-hours computation: time-of-day parsing, overnight wraparound and
//! the per-day outcome used by the monthly fold.

use crate::core::calculator::punch::{ReducedPunch, parse_punches, split_punches};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const HOURS_PER_DAY: f64 = 24.0;

/// How a bare number without ':' is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DecimalNotation {
    /// "8.5" is 8.5 hours after midnight (08:30).
    #[default]
    Fraction,
    /// "8.30" is 8 hours 30 minutes; "8.5" is 08:50.
    Clock,
}

/// What to do with the punches between the first and the last one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PunchPolicy {
    /// Only first and last punch count, breaks are not deducted.
    #[default]
    FirstLast,
    /// Consecutive punches form (in, out) pairs whose spans are summed.
    Paired,
}

/// Result of reading one punch token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeReading {
    /// Hours since midnight, in [0, 24).
    Parsed(f64),
    Failed,
    Absent,
}

/// Result of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayOutcome {
    Worked(f64),
    /// At least one punch is missing.
    Missing,
    /// Both punches are there but one of them is not a time.
    Unreadable,
}

impl DayOutcome {
    pub fn hours(&self) -> f64 {
        match self {
            DayOutcome::Worked(h) => *h,
            DayOutcome::Missing | DayOutcome::Unreadable => 0.0,
        }
    }

    pub fn is_worked(&self) -> bool {
        matches!(self, DayOutcome::Worked(_))
    }

    pub fn label(&self) -> String {
        match self {
            DayOutcome::Worked(h) => format!("{h:.2}"),
            DayOutcome::Missing => "missing".to_string(),
            DayOutcome::Unreadable => "unreadable".to_string(),
        }
    }
}

/// Read a punch token as hours since midnight.
pub fn read_time(token: Option<&str>, notation: DecimalNotation) -> TimeReading {
    let Some(raw) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return TimeReading::Absent;
    };

    let value = if raw.contains(':') {
        read_colon(raw)
    } else {
        match notation {
            DecimalNotation::Fraction => read_fraction(raw),
            DecimalNotation::Clock => read_clock(raw),
        }
    };

    match value {
        Some(h) => TimeReading::Parsed(h),
        None => TimeReading::Failed,
    }
}

/// "HH:MM"
fn read_colon(raw: &str) -> Option<f64> {
    let (h, m) = raw.split_once(':')?;
    let hours: u32 = h.trim().parse().ok()?;
    let minutes: u32 = m.trim().parse().ok()?;
    hours_minutes(hours, minutes)
}

fn read_fraction(raw: &str) -> Option<f64> {
    let v: f64 = raw.parse().ok()?;
    (v.is_finite() && (0.0..HOURS_PER_DAY).contains(&v)).then_some(v)
}

/// "H.MM" with the digits after the dot as minutes ("8.5" = 8:50).
fn read_clock(raw: &str) -> Option<f64> {
    let (h, m) = raw.split_once('.').unwrap_or((raw, ""));
    let hours: u32 = h.parse().ok()?;

    if !m.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let minutes = match m.len() {
        0 => 0,
        1 => m.parse::<u32>().ok()? * 10,
        2 => m.parse::<u32>().ok()?,
        _ => return None,
    };

    hours_minutes(hours, minutes)
}

fn hours_minutes(hours: u32, minutes: u32) -> Option<f64> {
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours as f64 + minutes as f64 / 60.0)
}

/// Elapsed hours from `start` to `end`; an end earlier than the start
/// crosses midnight.
pub fn span_hours(start: f64, end: f64) -> f64 {
    let span = if start > end {
        (HOURS_PER_DAY - start) + end
    } else {
        end - start
    };
    span.max(0.0)
}

/// Outcome of a (check-in, check-out) pair.
pub fn evaluate(
    check_in: Option<&str>,
    check_out: Option<&str>,
    notation: DecimalNotation,
) -> DayOutcome {
    let start = read_time(check_in, notation);
    let end = read_time(check_out, notation);

    match (start, end) {
        (TimeReading::Absent, _) | (_, TimeReading::Absent) => DayOutcome::Missing,
        (TimeReading::Parsed(s), TimeReading::Parsed(e)) => DayOutcome::Worked(span_hours(s, e)),
        _ => DayOutcome::Unreadable,
    }
}

/// Hours worked between two punches, 0.0 when either is missing or not a
/// time. Bare numbers are read as fractional hours.
pub fn compute(check_in: Option<&str>, check_out: Option<&str>) -> f64 {
    evaluate(check_in, check_out, DecimalNotation::Fraction).hours()
}

/// Per-day calculator carrying the configured reading rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkHoursCalculator {
    pub notation: DecimalNotation,
    pub policy: PunchPolicy,
}

impl WorkHoursCalculator {
    pub fn new(notation: DecimalNotation, policy: PunchPolicy) -> Self {
        Self { notation, policy }
    }

    /// Reduce a raw cell and compute its outcome.
    pub fn evaluate_cell(&self, raw: Option<&str>) -> (ReducedPunch, DayOutcome) {
        let reduced = parse_punches(raw);

        let outcome = match self.policy {
            PunchPolicy::FirstLast => {
                evaluate(reduced.check_in(), reduced.check_out(), self.notation)
            }
            PunchPolicy::Paired => self.evaluate_paired(&split_punches(raw)),
        };

        (reduced, outcome)
    }

    /// Sum of the (1st,2nd), (3rd,4th), ... spans. A trailing odd punch
    /// is ignored.
    fn evaluate_paired(&self, tokens: &[&str]) -> DayOutcome {
        if tokens.len() < 2 {
            return DayOutcome::Missing;
        }

        let mut total = 0.0;
        for pair in tokens.chunks_exact(2) {
            match evaluate(Some(pair[0]), Some(pair[1]), self.notation) {
                DayOutcome::Worked(h) => total += h,
                other => return other,
            }
        }

        DayOutcome::Worked(total)
    }
}
