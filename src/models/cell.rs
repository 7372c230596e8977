use calamine::Data;
use chrono::{NaiveDateTime, NaiveTime, Timelike};

const MINUTES_PER_DAY: f64 = 1440.0;
const LAST_MINUTE: u32 = 1439;

/// A source cell as seen by the punch parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CellValue {
    #[default]
    Absent,
    Blank,
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            CellValue::Blank
        } else {
            CellValue::Text(s)
        }
    }

    /// Input for the punch parser: None for absent and blank cells.
    pub fn as_punch_input(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            CellValue::Absent | CellValue::Blank => None,
        }
    }

}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Absent,
            Data::String(s) => CellValue::text(s.as_str()),
            Data::Int(i) => CellValue::Text(i.to_string()),
            Data::Float(f) => CellValue::Text(f.to_string()),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            Data::DateTime(dt) => CellValue::Text(serial_to_hhmm(dt.as_f64())),
            Data::DateTimeIso(s) => CellValue::Text(iso_to_hhmm(s).unwrap_or_else(|| s.clone())),
            Data::DurationIso(s) => CellValue::text(s.as_str()),
        }
    }
}

impl From<Option<&Data>> for CellValue {
    fn from(data: Option<&Data>) -> Self {
        data.map(CellValue::from).unwrap_or_default()
    }
}

/// Time-of-day part of an Excel serial, rounded to the minute.
/// Rounding never carries into the next day: 23:59:30 and later stay 23:59.
fn serial_to_hhmm(serial: f64) -> String {
    let minutes = ((serial.fract().abs() * MINUTES_PER_DAY).round() as u32).min(LAST_MINUTE);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn iso_to_hhmm(s: &str) -> Option<String> {
    let time = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.time())
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S%.f"))
        .ok()?;
    Some(format!("{:02}:{:02}", time.hour(), time.minute()))
}
