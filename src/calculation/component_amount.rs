//! Component line evaluation.
//!
//! Turns a resolved salary component instance into a payslip line item
//! with its computed monetary amount.

use rust_decimal::Decimal;

use super::rounding::round2;
use crate::models::{CalculationMode, PayslipLine, SalaryComponentInstance};

/// Evaluates one resolved component against an employee's base salary.
///
/// Fixed-amount components carry their configured value as-is;
/// percentage-of-base components compute round2(value / 100 x base).
/// The engine never sees whether the instance came from an override or a
/// default; both evaluate identically.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::component_line;
/// use payroll_engine::models::{
///     CalculationMode, ComponentKind, ResolvedComponent, SalaryComponentInstance,
/// };
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let instance = SalaryComponentInstance::Default(ResolvedComponent {
///     component_id: "pf".to_string(),
///     name: "Provident Fund".to_string(),
///     kind: ComponentKind::Deduction,
///     mode: CalculationMode::PercentageOfBase,
///     value: Decimal::from_str("5").unwrap(),
/// });
///
/// let line = component_line(&instance, Decimal::from_str("3000.00").unwrap());
/// assert_eq!(line.amount, Decimal::from_str("150.00").unwrap());
/// ```
pub fn component_line(instance: &SalaryComponentInstance, base_salary: Decimal) -> PayslipLine {
    let terms = instance.terms();
    let amount = match terms.mode {
        CalculationMode::FixedAmount => terms.value,
        CalculationMode::PercentageOfBase => {
            round2(terms.value / Decimal::from(100) * base_salary)
        }
    };

    PayslipLine {
        component_id: terms.component_id.clone(),
        name: terms.name.clone(),
        kind: terms.kind,
        mode: terms.mode,
        base_value: terms.value,
        amount,
    }
}
