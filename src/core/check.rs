//! Built-in table of known check-in/check-out pairs and their hours.

use crate::core::calculator::compute;
use crate::ui::messages::{error, success};

const TOLERANCE: f64 = 0.01;

pub struct CheckCase {
    pub check_in: &'static str,
    pub check_out: &'static str,
    pub expected: f64,
    pub description: &'static str,
}

pub const CASES: &[CheckCase] = &[
    CheckCase { check_in: "08:30", check_out: "18:30", expected: 10.0, description: "same-day shift" },
    CheckCase { check_in: "09:00", check_out: "17:00", expected: 8.0, description: "same-day 8h shift" },
    CheckCase { check_in: "22:00", check_out: "06:00", expected: 8.0, description: "overnight shift" },
    CheckCase { check_in: "23:00", check_out: "07:00", expected: 8.0, description: "overnight shift" },
    CheckCase { check_in: "00:00", check_out: "08:00", expected: 8.0, description: "shift starting at midnight" },
    CheckCase { check_in: "16:00", check_out: "00:00", expected: 8.0, description: "shift ending at midnight" },
    CheckCase { check_in: "08:00", check_out: "08:00", expected: 0.0, description: "same instant" },
    CheckCase { check_in: "18:30", check_out: "08:30", expected: 14.0, description: "long overnight shift" },
    CheckCase { check_in: "", check_out: "18:30", expected: 0.0, description: "missing check-in" },
    CheckCase { check_in: "08:30", check_out: "", expected: 0.0, description: "missing check-out" },
    CheckCase { check_in: "", check_out: "", expected: 0.0, description: "no punches" },
];

/// Run the table and print one line per case. Returns the number of
/// cases off by at least the tolerance.
pub fn run_checks() -> usize {
    let mut failed = 0;

    for case in CASES {
        let got = compute(Some(case.check_in), Some(case.check_out));
        let line = format!(
            "{}: {} → {} = {got:.2} h (expected {:.2} h)",
            case.description,
            show(case.check_in),
            show(case.check_out),
            case.expected
        );

        if (got - case.expected).abs() < TOLERANCE {
            success(line);
        } else {
            failed += 1;
            error(line);
        }
    }

    failed
}

fn show(s: &str) -> &str {
    if s.is_empty() { "--:--" } else { s }
}
