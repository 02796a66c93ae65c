//! Working-day counting.
//!
//! Working days are the Mon-Fri weekdays of the calendar month. Weekends
//! are categorically excluded; institutional holiday calendars are not
//! consulted.

use chrono::{Datelike, NaiveDate};

use crate::models::Period;

/// Counts the weekdays (Mon-Fri) in the period's calendar month.
///
/// Returns 0 for a period that does not map to a real calendar month;
/// callers are expected to have validated the period first.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::working_days_in_month;
/// use payroll_engine::models::Period;
///
/// // March 2026 has 22 weekdays.
/// assert_eq!(working_days_in_month(&Period { month: 3, year: 2026 }), 22);
/// ```
pub fn working_days_in_month(period: &Period) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(period.year, period.month, 1) else {
        return 0;
    };

    let next_month = if period.month == 12 {
        NaiveDate::from_ymd_opt(period.year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(period.year, period.month + 1, 1)
    };
    let Some(next_month) = next_month else {
        return 0;
    };

    first
        .iter_days()
        .take_while(|day| *day < next_month)
        .filter(|day| day.weekday().number_from_monday() <= 5)
        .count() as u32
}
