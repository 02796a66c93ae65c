//! Roster-level calculation entry point.
//!
//! Pure function of its inputs: no I/O, fully deterministic. Per-employee
//! computation shares no mutable state, so callers may parallelize across
//! the roster if they wish; only the final aggregate summation is a
//! synchronization point.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::payslip::calculate_payslip;
use super::rounding::round2;
use super::working_days::working_days_in_month;
use crate::error::EngineResult;
use crate::models::{
    ApprovedLeave, AttendanceRecord, Employee, PayrollCalculation, PeriodTotals, Period,
    SalaryComponentInstance,
};

/// Calculates payslip drafts and period aggregates for a whole roster.
///
/// `resolved` maps employee ids to their resolver output; employees with
/// no entry are calculated with no components (base salary and attendance
/// proration only). Attendance and leave rows for employees not on the
/// roster are ignored.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidPeriod`] for a malformed
/// period. An empty roster is not an error: it yields an empty draft
/// list, which callers must treat as a "nothing to pay" condition
/// requiring explicit operator confirmation before commit.
pub fn calculate(
    period: Period,
    roster: &[Employee],
    attendance: &[AttendanceRecord],
    approved_leave: &[ApprovedLeave],
    resolved: &HashMap<String, Vec<SalaryComponentInstance>>,
) -> EngineResult<PayrollCalculation> {
    period.validate()?;

    let working_days = working_days_in_month(&period);

    let mut attendance_by_employee: HashMap<&str, Vec<AttendanceRecord>> = HashMap::new();
    for record in attendance {
        attendance_by_employee
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record.clone());
    }

    let mut leave_by_employee: HashMap<&str, Vec<ApprovedLeave>> = HashMap::new();
    for leave in approved_leave {
        leave_by_employee
            .entry(leave.employee_id.as_str())
            .or_default()
            .push(leave.clone());
    }

    let empty_components: Vec<SalaryComponentInstance> = Vec::new();
    let payslips: Vec<_> = roster
        .iter()
        .map(|employee| {
            let records = attendance_by_employee
                .get(employee.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let leave = leave_by_employee
                .get(employee.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let components = resolved.get(&employee.id).unwrap_or(&empty_components);
            calculate_payslip(employee, working_days, records, leave, components)
        })
        .collect();

    let total_gross = round2(payslips.iter().map(|p| p.gross_earnings).sum::<Decimal>());
    let total_deductions = round2(payslips.iter().map(|p| p.total_deductions).sum::<Decimal>());
    let total_net = round2(payslips.iter().map(|p| p.net_pay).sum::<Decimal>());

    Ok(PayrollCalculation {
        period,
        working_days,
        totals: PeriodTotals {
            employee_count: payslips.len() as u32,
            total_gross,
            total_deductions,
            total_net,
        },
        payslips,
    })
}
