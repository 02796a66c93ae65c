//! Attendance models.
//!
//! This module defines the [`AttendanceRecord`] rows written by the
//! external time-clock subsystem and the [`AttendanceCounts`] summary
//! carried on a payslip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The status recorded for an employee on a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Present for the full day.
    Present,
    /// Absent without approved leave.
    Absent,
    /// Arrived late; counts as a full present day for pay purposes.
    Late,
    /// Worked half the day; counts as 0.5 present days.
    HalfDay,
    /// Marked on leave in the attendance sheet.
    OnLeave,
}

/// A single attendance row: one employee, one date, one status.
///
/// Immutable once written by the time-clock subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The recorded status for that date.
    pub status: AttendanceStatus,
}

/// Per-status day counts for one employee over one period.
///
/// Carried on each payslip so the breakdown can be rendered without
/// re-reading attendance rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCounts {
    /// Days marked present.
    pub present: u32,
    /// Days marked absent.
    pub absent: u32,
    /// Days marked late.
    pub late: u32,
    /// Days marked half-day.
    pub half_day: u32,
    /// Days marked on leave in the attendance sheet.
    pub on_leave: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
            "\"half_day\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
    }

    #[test]
    fn test_deserialize_attendance_record() {
        let json = r#"{
            "employee_id": "emp_001",
            "date": "2026-03-02",
            "status": "late"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(record.status, AttendanceStatus::Late);
    }

    #[test]
    fn test_attendance_counts_default_is_zero() {
        let counts = AttendanceCounts::default();
        assert_eq!(counts.present, 0);
        assert_eq!(counts.absent, 0);
        assert_eq!(counts.late, 0);
        assert_eq!(counts.half_day, 0);
        assert_eq!(counts.on_leave, 0);
    }

    #[test]
    fn test_attendance_counts_round_trip() {
        let counts = AttendanceCounts {
            present: 18,
            absent: 2,
            late: 1,
            half_day: 2,
            on_leave: 1,
        };
        let json = serde_json::to_string(&counts).unwrap();
        let back: AttendanceCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
