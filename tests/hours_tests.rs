use punchsheet::core::calculator::hours::{
    DayOutcome, DecimalNotation, PunchPolicy, TimeReading, WorkHoursCalculator, compute, evaluate,
    read_time, span_hours,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

fn hhmm(h: u32, m: u32) -> String {
    format!("{h:02}:{m:02}")
}

#[test]
fn test_literal_scenarios() {
    assert!(approx(compute(Some("08:30"), Some("18:30")), 10.0));
    assert!(approx(compute(Some("22:00"), Some("06:00")), 8.0));
    assert!(approx(compute(Some("18:30"), Some("08:30")), 14.0));
    assert!(approx(compute(Some("09:00"), Some("17:00")), 8.0));
    assert_eq!(compute(Some(""), Some("18:30")), 0.0);
    assert_eq!(evaluate(Some(""), Some("18:30"), DecimalNotation::Fraction), DayOutcome::Missing);
}

#[test]
fn test_same_instant_is_zero_hours_worked() {
    let outcome = evaluate(Some("08:00"), Some("08:00"), DecimalNotation::Fraction);
    assert_eq!(outcome, DayOutcome::Worked(0.0));
    assert!(outcome.is_worked());
}

#[test]
fn test_missing_side_gives_zero() {
    for x in ["08:00", "8.5", "17", "garbage", ""] {
        assert_eq!(compute(None, Some(x)), 0.0);
        assert_eq!(compute(Some(x), None), 0.0);
    }
}

#[test]
fn test_same_day_difference_for_whole_grid() {
    for h_in in 0..24 {
        for m_in in [0, 15, 30, 45] {
            for h_out in h_in..24 {
                for m_out in [0, 20, 40] {
                    let start = h_in as f64 + m_in as f64 / 60.0;
                    let end = h_out as f64 + m_out as f64 / 60.0;
                    if start >= end {
                        continue;
                    }
                    let got = compute(Some(hhmm(h_in, m_in).as_str()), Some(hhmm(h_out, m_out).as_str()));
                    assert!(approx(got, end - start), "{h_in}:{m_in} → {h_out}:{m_out} = {got}");
                }
            }
        }
    }
}

#[test]
fn test_overnight_wraparound_for_whole_grid() {
    for h_in in 0..24 {
        for h_out in 0..h_in {
            for m in [0, 30] {
                let start = h_in as f64 + m as f64 / 60.0;
                let end = h_out as f64;
                let got = compute(Some(hhmm(h_in, m).as_str()), Some(hhmm(h_out, 0).as_str()));
                assert!(approx(got, (24.0 - start) + end), "{h_in}:{m} → {h_out}:00 = {got}");
            }
        }
    }
}

#[test]
fn test_midnight_is_a_real_time() {
    assert_eq!(
        read_time(Some("00:00"), DecimalNotation::Fraction),
        TimeReading::Parsed(0.0)
    );
    assert!(approx(compute(Some("00:00"), Some("08:00")), 8.0));
    assert!(approx(compute(Some("22:00"), Some("00:00")), 2.0));
    assert!(approx(compute(Some("0"), Some("6.5")), 6.5));
}

#[test]
fn test_unreadable_is_distinct_from_missing() {
    let n = DecimalNotation::Fraction;
    assert_eq!(evaluate(Some("8:00"), Some("abc"), n), DayOutcome::Unreadable);
    assert_eq!(evaluate(Some("25:00"), Some("08:00"), n), DayOutcome::Unreadable);
    assert_eq!(evaluate(Some("08:60"), Some("17:00"), n), DayOutcome::Unreadable);
    assert_eq!(evaluate(Some("08:00:00"), Some("17:00"), n), DayOutcome::Unreadable);
    assert_eq!(evaluate(Some("abc"), None, n), DayOutcome::Missing);
    assert_eq!(compute(Some("8:00"), Some("abc")), 0.0);
}

#[test]
fn test_read_time_variants() {
    let n = DecimalNotation::Fraction;
    assert_eq!(read_time(Some(" 8:30 "), n), TimeReading::Parsed(8.5));
    assert_eq!(read_time(Some("17"), n), TimeReading::Parsed(17.0));
    assert_eq!(read_time(Some("8.5"), n), TimeReading::Parsed(8.5));
    assert_eq!(read_time(Some("24"), n), TimeReading::Failed);
    assert_eq!(read_time(Some("-1"), n), TimeReading::Failed);
    assert_eq!(read_time(Some("NaN"), n), TimeReading::Failed);
    assert_eq!(read_time(Some("   "), n), TimeReading::Absent);
    assert_eq!(read_time(None, n), TimeReading::Absent);
}

#[test]
fn test_bare_decimal_is_fractional_hours_by_default() {
    // 8.5 means half past eight, not 8h05 or 8h50
    assert!(approx(compute(Some("8.5"), Some("17.5")), 9.0));
    assert!(approx(compute(Some("8.30"), Some("17")), 8.7));
}

#[test]
fn test_clock_notation_reads_minutes_after_the_dot() {
    let n = DecimalNotation::Clock;
    assert_eq!(read_time(Some("8.30"), n), TimeReading::Parsed(8.5));
    assert_eq!(read_time(Some("8"), n), TimeReading::Parsed(8.0));
    assert!(matches!(read_time(Some("8.5"), n), TimeReading::Parsed(h) if approx(h, 8.0 + 50.0 / 60.0)));
    assert_eq!(read_time(Some("8.75"), n), TimeReading::Failed);
    assert_eq!(read_time(Some("8.305"), n), TimeReading::Failed);
    assert!(approx(evaluate(Some("8.30"), Some("17.30"), n).hours(), 9.0));
}

#[test]
fn test_span_hours_never_negative() {
    assert_eq!(span_hours(8.0, 8.0), 0.0);
    assert!(approx(span_hours(23.99, 0.0), 0.01));
    assert!(span_hours(0.0, 23.999) >= 0.0);
}

#[test]
fn test_first_last_policy_ignores_breaks() {
    let calc = WorkHoursCalculator::default();
    let (punch, outcome) = calc.evaluate_cell(Some("08:30\n12:00\n13:00\n18:30"));
    assert_eq!(punch.check_in(), Some("08:30"));
    assert_eq!(punch.check_out(), Some("18:30"));
    assert!(approx(outcome.hours(), 10.0));
}

#[test]
fn test_paired_policy_deducts_breaks() {
    let calc = WorkHoursCalculator::new(DecimalNotation::Fraction, PunchPolicy::Paired);

    let (punch, outcome) = calc.evaluate_cell(Some("08:30\n12:00\n13:00\n18:30"));
    assert_eq!(punch.check_out(), Some("18:30"));
    assert!(approx(outcome.hours(), 9.0));

    // trailing odd punch is ignored
    let (_, outcome) = calc.evaluate_cell(Some("08:00\n12:00\n13:00"));
    assert!(approx(outcome.hours(), 4.0));

    let (_, outcome) = calc.evaluate_cell(Some("08:00"));
    assert_eq!(outcome, DayOutcome::Missing);

    let (_, outcome) = calc.evaluate_cell(Some("08:00\n12:00\nxx\n18:00"));
    assert_eq!(outcome, DayOutcome::Unreadable);
}

#[test]
fn test_outcome_labels() {
    assert_eq!(DayOutcome::Worked(8.0).label(), "8.00");
    assert_eq!(DayOutcome::Missing.label(), "missing");
    assert_eq!(DayOutcome::Unreadable.label(), "unreadable");
    assert_eq!(DayOutcome::Unreadable.hours(), 0.0);
}
