//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/runs` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{PayslipDraft, Period};

/// Request body for the `/calculate` endpoint.
///
/// Identifies the payroll period to preview. The calculation runs over
/// the full active roster unless `employee_ids` narrows it down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The payroll month (1-12).
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// Optional subset of employee ids to calculate for.
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
}

impl CalculationRequest {
    /// The period this request addresses.
    pub fn period(&self) -> Period {
        Period {
            month: self.month,
            year: self.year,
        }
    }
}

/// Request body for the `POST /runs` endpoint.
///
/// Carries the operator-reviewed payslip drafts verbatim; the run is
/// committed from exactly these drafts, never recomputed from current
/// stored data. The committing operator's identity is carried explicitly
/// in `created_by`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRequest {
    /// The payroll month (1-12).
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// Operator-supplied title for the run.
    pub title: String,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Identity of the committing operator.
    pub created_by: String,
    /// The reviewed payslip drafts to commit, as returned by `/calculate`.
    pub payslips: Vec<PayslipDraft>,
    /// Confirms committing a run with zero payslips.
    #[serde(default)]
    pub confirm_empty: bool,
}

impl CommitRequest {
    /// The period this request addresses.
    pub fn period(&self) -> Period {
        Period {
            month: self.month,
            year: self.year,
        }
    }
}
