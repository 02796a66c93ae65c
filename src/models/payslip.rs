//! Payslip models.
//!
//! This module contains the transient [`PayslipDraft`] produced by the
//! calculation engine and the durable [`Payslip`] persisted by the run
//! committer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceCounts, CalculationMode, ComponentKind};

/// A single resolved earning or deduction line on a payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// The component id this line originated from, or
    /// `"attendance_deduction"` for the synthetic attendance line.
    pub component_id: String,
    /// Display name of the component.
    pub name: String,
    /// Earning or deduction.
    pub kind: ComponentKind,
    /// How the amount was derived.
    pub mode: CalculationMode,
    /// The configured value the amount was computed from.
    pub base_value: Decimal,
    /// The computed monetary amount, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// The transient, unpersisted result of calculation for one employee.
///
/// All monetary values carry 2-decimal rounding applied at each
/// aggregation step, so per-field sums across drafts reproduce the
/// period aggregates exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipDraft {
    /// The employee the draft is for.
    pub employee_id: String,
    /// Snapshot of the employee's base salary at calculation time.
    pub base_salary: Decimal,
    /// Working days (Mon-Fri) in the calendar month.
    pub working_days: u32,
    /// Per-status attendance day counts for the period.
    pub attendance: AttendanceCounts,
    /// Approved-leave days counted toward effective presence.
    pub leave_days: u32,
    /// Resolved earning lines, overrides first then defaults.
    pub earnings: Vec<PayslipLine>,
    /// Resolved deduction lines, same ordering, with the synthetic
    /// attendance deduction appended when greater than zero.
    pub deductions: Vec<PayslipLine>,
    /// The attendance-based proration deduction; always present here even
    /// when zero, but only rendered as a line item when positive.
    pub attendance_deduction: Decimal,
    /// base_salary plus earning lines, rounded.
    pub gross_earnings: Decimal,
    /// Deduction lines plus attendance deduction, rounded.
    pub total_deductions: Decimal,
    /// max(0, gross_earnings - total_deductions).
    pub net_pay: Decimal,
}

/// Lifecycle status of a persisted payslip.
///
/// The only field of a committed payslip that may change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    /// Created by a run commit; not yet paid out.
    Generated,
    /// Marked paid by downstream bookkeeping.
    Paid,
}

/// A persisted payslip, one per employee per payroll run.
///
/// The breakdown is never recomputed after commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for the payslip.
    pub id: Uuid,
    /// The payroll run this payslip belongs to.
    pub run_id: Uuid,
    /// Lifecycle status; mutable post-commit.
    pub status: PayslipStatus,
    /// The full calculation breakdown, identical in structure to the
    /// draft it was committed from.
    pub breakdown: PayslipDraft,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_draft() -> PayslipDraft {
        PayslipDraft {
            employee_id: "emp_001".to_string(),
            base_salary: dec("3000.00"),
            working_days: 20,
            attendance: AttendanceCounts {
                present: 18,
                absent: 2,
                late: 0,
                half_day: 0,
                on_leave: 0,
            },
            leave_days: 0,
            earnings: vec![PayslipLine {
                component_id: "transport".to_string(),
                name: "Transport Allowance".to_string(),
                kind: ComponentKind::Earning,
                mode: CalculationMode::FixedAmount,
                base_value: dec("200.00"),
                amount: dec("200.00"),
            }],
            deductions: vec![PayslipLine {
                component_id: "attendance_deduction".to_string(),
                name: "Attendance Deduction".to_string(),
                kind: ComponentKind::Deduction,
                mode: CalculationMode::FixedAmount,
                base_value: dec("300.00"),
                amount: dec("300.00"),
            }],
            attendance_deduction: dec("300.00"),
            gross_earnings: dec("3200.00"),
            total_deductions: dec("300.00"),
            net_pay: dec("2900.00"),
        }
    }

    #[test]
    fn test_draft_serialization_round_trip() {
        let draft = sample_draft();
        let json = serde_json::to_string(&draft).unwrap();
        let back: PayslipDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_payslip_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PayslipStatus::Generated).unwrap(),
            "\"generated\""
        );
        assert_eq!(
            serde_json::to_string(&PayslipStatus::Paid).unwrap(),
            "\"paid\""
        );
    }

    #[test]
    fn test_payslip_embeds_breakdown() {
        let payslip = Payslip {
            id: Uuid::nil(),
            run_id: Uuid::nil(),
            status: PayslipStatus::Generated,
            breakdown: sample_draft(),
        };

        let json = serde_json::to_string(&payslip).unwrap();
        assert!(json.contains("\"status\":\"generated\""));
        assert!(json.contains("\"breakdown\":{"));

        let back: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(back.breakdown.net_pay, dec("2900.00"));
    }
}
