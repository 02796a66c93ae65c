//! Approved leave model.
//!
//! Only leave requests already approved by the external workflow are
//! visible to the engine; pending or rejected requests never reach it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An approved leave request contributing present-equivalent days.
///
/// Independent of [`super::AttendanceRecord`]; a day covered by both an
/// `on_leave` attendance row and an approved leave request is counted
/// twice toward effective presence. Deduplication is deliberately not
/// attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovedLeave {
    /// The employee the leave belongs to.
    pub employee_id: String,
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The total number of leave days granted (>= 1).
    pub total_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_approved_leave() {
        let json = r#"{
            "employee_id": "emp_001",
            "start_date": "2026-03-09",
            "end_date": "2026-03-11",
            "total_days": 3
        }"#;

        let leave: ApprovedLeave = serde_json::from_str(json).unwrap();
        assert_eq!(leave.employee_id, "emp_001");
        assert_eq!(leave.start_date, NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        assert_eq!(leave.end_date, NaiveDate::from_ymd_opt(2026, 3, 11).unwrap());
        assert_eq!(leave.total_days, 3);
    }

    #[test]
    fn test_serialize_round_trip() {
        let leave = ApprovedLeave {
            employee_id: "emp_002".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            total_days: 1,
        };
        let json = serde_json::to_string(&leave).unwrap();
        let back: ApprovedLeave = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leave);
    }
}
