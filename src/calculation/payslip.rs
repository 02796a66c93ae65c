//! Per-employee payslip assembly.
//!
//! Combines attendance, approved leave and resolved components into a
//! single [`PayslipDraft`] following the fixed step order: presence,
//! proration, component lines, gross, deductions, net.

use rust_decimal::Decimal;

use super::attendance::{absent_days, effective_present_days, summarize_attendance};
use super::attendance_deduction::attendance_deduction;
use super::component_amount::component_line;
use super::rounding::round2;
use crate::models::{
    ApprovedLeave, AttendanceRecord, CalculationMode, ComponentKind, Employee, PayslipDraft,
    PayslipLine, SalaryComponentInstance,
};

/// Component id used for the synthetic attendance deduction line.
pub const ATTENDANCE_DEDUCTION_ID: &str = "attendance_deduction";

/// Calculates the payslip draft for one employee.
///
/// Pure and deterministic: identical inputs produce identical drafts.
/// `attendance` and `leave` must already be filtered to this employee and
/// period. Component instances are evaluated in the order the resolver
/// produced them (overrides first, then defaults), and that order is
/// preserved in the earning and deduction line lists.
///
/// The attendance deduction is always reported on the draft; it is only
/// appended to the deduction lines when greater than zero.
pub fn calculate_payslip(
    employee: &Employee,
    working_days: u32,
    attendance: &[AttendanceRecord],
    leave: &[ApprovedLeave],
    components: &[SalaryComponentInstance],
) -> PayslipDraft {
    let counts = summarize_attendance(attendance);
    let leave_days: u32 = leave.iter().map(|l| l.total_days).sum();

    let effective_present = effective_present_days(&counts, leave_days);
    let absent = absent_days(working_days, effective_present);
    let deduction_for_absence = attendance_deduction(absent, working_days, employee.base_salary);

    let mut earnings: Vec<PayslipLine> = Vec::new();
    let mut deductions: Vec<PayslipLine> = Vec::new();
    for instance in components {
        let line = component_line(instance, employee.base_salary);
        match line.kind {
            ComponentKind::Earning => earnings.push(line),
            ComponentKind::Deduction => deductions.push(line),
        }
    }

    let earnings_sum: Decimal = earnings.iter().map(|line| line.amount).sum();
    let component_deductions_sum: Decimal = deductions.iter().map(|line| line.amount).sum();

    if deduction_for_absence > Decimal::ZERO {
        deductions.push(PayslipLine {
            component_id: ATTENDANCE_DEDUCTION_ID.to_string(),
            name: "Attendance Deduction".to_string(),
            kind: ComponentKind::Deduction,
            mode: CalculationMode::FixedAmount,
            base_value: deduction_for_absence,
            amount: deduction_for_absence,
        });
    }

    let gross_earnings = round2(employee.base_salary + earnings_sum);
    let total_deductions = round2(component_deductions_sum + deduction_for_absence);
    let net_pay = round2(gross_earnings - total_deductions).max(Decimal::ZERO);

    PayslipDraft {
        employee_id: employee.id.clone(),
        base_salary: employee.base_salary,
        working_days,
        attendance: counts,
        leave_days,
        earnings,
        deductions,
        attendance_deduction: deduction_for_absence,
        gross_earnings,
        total_deductions,
        net_pay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, ResolvedComponent, StaffCategory};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(base: &str) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Asha Rahman".to_string(),
            base_salary: dec(base),
            staff_category: StaffCategory::Academic,
            is_active: true,
        }
    }

    fn records(present: u32, absent: u32) -> Vec<AttendanceRecord> {
        let mut rows = Vec::new();
        for day in 0..present {
            rows.push(AttendanceRecord {
                employee_id: "emp_001".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap() + chrono::Days::new(day as u64),
                status: AttendanceStatus::Present,
            });
        }
        for day in 0..absent {
            rows.push(AttendanceRecord {
                employee_id: "emp_001".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 3, 25).unwrap()
                    + chrono::Days::new(day as u64),
                status: AttendanceStatus::Absent,
            });
        }
        rows
    }

    fn earning_fixed(id: &str, value: &str) -> SalaryComponentInstance {
        SalaryComponentInstance::Default(ResolvedComponent {
            component_id: id.to_string(),
            name: format!("Earning {id}"),
            kind: ComponentKind::Earning,
            mode: CalculationMode::FixedAmount,
            value: dec(value),
        })
    }

    fn deduction_percent(id: &str, value: &str) -> SalaryComponentInstance {
        SalaryComponentInstance::Default(ResolvedComponent {
            component_id: id.to_string(),
            name: format!("Deduction {id}"),
            kind: ComponentKind::Deduction,
            mode: CalculationMode::PercentageOfBase,
            value: dec(value),
        })
    }

    /// The reference scenario: 3000 base, 20 working days, 18 present +
    /// 2 absent, one fixed $200 earning, one 5% deduction.
    #[test]
    fn test_reference_scenario() {
        let draft = calculate_payslip(
            &employee("3000.00"),
            20,
            &records(18, 2),
            &[],
            &[earning_fixed("transport", "200"), deduction_percent("pf", "5")],
        );

        assert_eq!(draft.attendance_deduction, dec("300.00"));
        assert_eq!(draft.gross_earnings, dec("3200.00"));
        assert_eq!(draft.total_deductions, dec("450.00"));
        assert_eq!(draft.net_pay, dec("2750.00"));

        // Synthetic line appended after the component deduction.
        assert_eq!(draft.deductions.len(), 2);
        assert_eq!(draft.deductions[1].component_id, ATTENDANCE_DEDUCTION_ID);
        assert_eq!(draft.deductions[1].amount, dec("300.00"));
    }

    #[test]
    fn test_no_absence_no_components_pays_base_salary() {
        let draft = calculate_payslip(&employee("2500.00"), 20, &records(20, 0), &[], &[]);

        assert_eq!(draft.attendance_deduction, dec("0"));
        assert_eq!(draft.gross_earnings, dec("2500.00"));
        assert_eq!(draft.total_deductions, dec("0.00"));
        assert_eq!(draft.net_pay, dec("2500.00"));
        assert!(draft.deductions.is_empty());
    }

    #[test]
    fn test_zero_attendance_deduction_not_rendered_as_line() {
        let draft = calculate_payslip(
            &employee("2500.00"),
            20,
            &records(20, 0),
            &[],
            &[deduction_percent("pf", "5")],
        );

        assert_eq!(draft.attendance_deduction, dec("0"));
        assert_eq!(draft.deductions.len(), 1);
        assert_eq!(draft.deductions[0].component_id, "pf");
    }

    #[test]
    fn test_overlapping_presence_clamps_absence_to_zero() {
        // 20 present attendance days plus 3 approved-leave days exceeds
        // the 20 working days; absence clamps to 0, deduction to 0.
        let leave = vec![ApprovedLeave {
            employee_id: "emp_001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
            total_days: 3,
        }];
        let draft = calculate_payslip(&employee("3000.00"), 20, &records(20, 0), &leave, &[]);

        assert_eq!(draft.leave_days, 3);
        assert_eq!(draft.attendance_deduction, dec("0"));
        assert_eq!(draft.net_pay, dec("3000.00"));
    }

    #[test]
    fn test_net_pay_floored_at_zero() {
        // Absent the whole month with an extra 200% deduction: net would
        // be deeply negative without the floor.
        let draft = calculate_payslip(
            &employee("3000.00"),
            20,
            &records(0, 20),
            &[],
            &[deduction_percent("levy", "200")],
        );

        assert_eq!(draft.attendance_deduction, dec("3000.00"));
        assert_eq!(draft.total_deductions, dec("9000.00"));
        assert_eq!(draft.net_pay, dec("0"));
    }

    #[test]
    fn test_half_days_prorate_deduction() {
        // 19 present + 2 half days = 20 effective; no absence.
        let mut rows = records(19, 0);
        for day in [26, 27] {
            rows.push(AttendanceRecord {
                employee_id: "emp_001".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
                status: AttendanceStatus::HalfDay,
            });
        }
        let draft = calculate_payslip(&employee("3000.00"), 20, &rows, &[], &[]);

        assert_eq!(draft.attendance.half_day, 2);
        assert_eq!(draft.attendance_deduction, dec("0"));
    }

    #[test]
    fn test_line_order_preserved_from_resolver() {
        let draft = calculate_payslip(
            &employee("3000.00"),
            20,
            &records(20, 0),
            &[],
            &[
                earning_fixed("second", "50"),
                earning_fixed("first", "100"),
            ],
        );

        assert_eq!(draft.earnings[0].component_id, "second");
        assert_eq!(draft.earnings[1].component_id, "first");
    }

    #[test]
    fn test_zero_working_days_month() {
        let draft = calculate_payslip(&employee("3000.00"), 0, &[], &[], &[]);
        assert_eq!(draft.attendance_deduction, dec("0"));
        assert_eq!(draft.net_pay, dec("3000.00"));
    }
}
