//! Attendance summarization and presence arithmetic.
//!
//! This module turns raw attendance rows into per-status counts and
//! derives effective present days and clamped absent days for one
//! employee over one period.

use rust_decimal::Decimal;

use crate::models::{AttendanceCounts, AttendanceRecord, AttendanceStatus};

/// Tallies attendance records into per-status day counts.
///
/// Records are expected to already be filtered to one employee and one
/// period (one row per date); the tally does not deduplicate.
pub fn summarize_attendance(records: &[AttendanceRecord]) -> AttendanceCounts {
    let mut counts = AttendanceCounts::default();
    for record in records {
        match record.status {
            AttendanceStatus::Present => counts.present += 1,
            AttendanceStatus::Absent => counts.absent += 1,
            AttendanceStatus::Late => counts.late += 1,
            AttendanceStatus::HalfDay => counts.half_day += 1,
            AttendanceStatus::OnLeave => counts.on_leave += 1,
        }
    }
    counts
}

/// Computes effective present days for pay proration.
///
/// present + late + 0.5 x half_day + on_leave (attendance sheet) plus the
/// approved-leave days granted by the leave workflow. The two leave
/// sources are summed without deduplication: a day marked `on_leave` in
/// attendance and also covered by an approved leave request counts twice.
/// The sum can therefore exceed the working-day count; [`absent_days`]
/// clamps the difference at zero.
pub fn effective_present_days(counts: &AttendanceCounts, approved_leave_days: u32) -> Decimal {
    let full_days = counts.present + counts.late + counts.on_leave + approved_leave_days;
    Decimal::from(full_days) + Decimal::new(5, 1) * Decimal::from(counts.half_day)
}

/// Absent days for proration: max(0, working_days - effective_present).
pub fn absent_days(working_days: u32, effective_present: Decimal) -> Decimal {
    let absent = Decimal::from(working_days) - effective_present;
    absent.max(Decimal::ZERO)
}
