//! Small numeric and calendar helpers shared by both experiments.

use chrono::{Datelike, Local, NaiveDate};

/// `100 * part / whole`, rounded to two decimals.
///
/// Callers guard `whole == 0`; a zero denominator here is a bug.
pub fn percent(part: usize, whole: usize) -> f64 {
    debug_assert!(whole > 0, "percent of an empty total");
    round2(part as f64 / whole as f64 * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Number of days in `month` of `year`, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => panic!("month {month} of year {year} is not a calendar month"),
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}
