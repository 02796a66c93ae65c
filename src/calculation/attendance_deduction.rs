//! Attendance-based proration deduction.

use rust_decimal::Decimal;

use super::rounding::round2;

/// Computes the attendance deduction for one employee.
///
/// round2((absent_days / working_days) x base_salary) when working_days
/// is positive, otherwise zero. The result is always reported on the
/// payslip draft, but only becomes a deduction line item when positive.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::attendance_deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let deduction = attendance_deduction(
///     Decimal::from_str("2").unwrap(),
///     20,
///     Decimal::from_str("3000.00").unwrap(),
/// );
/// assert_eq!(deduction, Decimal::from_str("300.00").unwrap());
/// ```
pub fn attendance_deduction(absent: Decimal, working_days: u32, base_salary: Decimal) -> Decimal {
    if working_days == 0 {
        return Decimal::ZERO;
    }
    round2(absent / Decimal::from(working_days) * base_salary)
}
