//! Monetary rounding policy.
//!
//! Every intermediate monetary sum in the engine is rounded to 2 decimal
//! places immediately after computation, not just at the end. Deferring
//! rounding to the final step diverges from expected totals on
//! multi-employee aggregates.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to 2 decimal places, half away from zero.
///
/// This is the conventional "round half up" behavior of the source
/// system, not banker's rounding.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("150.005").unwrap();
/// assert_eq!(round2(value), Decimal::from_str("150.01").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(round2(dec("1.005")), dec("1.01"));
        assert_eq!(round2(dec("1.004")), dec("1.00"));
        assert_eq!(round2(dec("2.675")), dec("2.68"));
    }

    #[test]
    fn test_rounds_half_away_from_zero_for_negatives() {
        assert_eq!(round2(dec("-1.005")), dec("-1.01"));
    }

    #[test]
    fn test_leaves_two_decimal_values_unchanged() {
        assert_eq!(round2(dec("300.00")), dec("300.00"));
        assert_eq!(round2(dec("0")), dec("0"));
    }

    #[test]
    fn test_repeating_division_is_truncated_to_cents() {
        // 1000 / 3 = 333.333... -> 333.33
        let third = dec("1000") / dec("3");
        assert_eq!(round2(third), dec("333.33"));
    }
}
