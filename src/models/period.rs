//! Payroll period model.
//!
//! This module contains the [`Period`] type identifying one payroll cycle
//! as a (month, year) pair.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifies one payroll cycle as a calendar (month, year) pair.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Period;
///
/// let period = Period { month: 3, year: 2026 };
/// assert!(period.validate().is_ok());
/// assert!(Period { month: 13, year: 2026 }.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The calendar month (1-12).
    pub month: u32,
    /// The calendar year.
    pub year: i32,
}

impl Period {
    /// Validates the period, returning [`EngineError::InvalidPeriod`] when
    /// the month falls outside 1-12 or the year is not positive.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) || self.year < 1 {
            return Err(EngineError::InvalidPeriod {
                month: self.month,
                year: self.year,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
