//! Calculation output models.
//!
//! This module contains the [`PayrollCalculation`] type returned by the
//! engine's `calculate` operation and the [`PeriodTotals`] aggregates
//! shared with persisted runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayslipDraft, Period};

/// Aggregate totals across a set of payslips.
///
/// Each total is the sum of the corresponding per-payslip rounded values,
/// re-rounded to 2 decimal places after summation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Number of employees considered.
    pub employee_count: u32,
    /// Sum of gross earnings.
    pub total_gross: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub total_net: Decimal,
}

/// The complete output of a payroll calculation for one period.
///
/// Purely computed; nothing here has been persisted. An empty roster
/// yields an empty `payslips` list rather than an error; callers must
/// treat that as a distinct "nothing to pay" condition requiring operator
/// confirmation before commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// The period the calculation covers.
    pub period: Period,
    /// Working days (Mon-Fri) in the calendar month.
    pub working_days: u32,
    /// Aggregate totals across all drafts.
    pub totals: PeriodTotals,
    /// One draft per employee, in roster order.
    pub payslips: Vec<PayslipDraft>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_totals_serialization() {
        let totals = PeriodTotals {
            employee_count: 3,
            total_gross: dec("9600.00"),
            total_deductions: dec("1350.00"),
            total_net: dec("8250.00"),
        };

        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"employee_count\":3"));
        assert!(json.contains("\"total_gross\":\"9600.00\""));
        assert!(json.contains("\"total_net\":\"8250.00\""));
    }

    #[test]
    fn test_empty_calculation_round_trip() {
        let calculation = PayrollCalculation {
            period: Period { month: 3, year: 2026 },
            working_days: 22,
            totals: PeriodTotals {
                employee_count: 0,
                total_gross: Decimal::ZERO,
                total_deductions: Decimal::ZERO,
                total_net: Decimal::ZERO,
            },
            payslips: vec![],
        };

        let json = serde_json::to_string(&calculation).unwrap();
        let back: PayrollCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calculation);
        assert!(back.payslips.is_empty());
    }
}
