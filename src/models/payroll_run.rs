//! Payroll run model.
//!
//! A [`PayrollRun`] is the immutable, persisted record of one committed
//! payroll cycle. Re-running payroll for the same period creates a new,
//! independent run; history is never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PeriodTotals, Period};

/// Status of a payroll run.
///
/// Runs are only ever persisted in `Completed` state; there is no
/// partial or draft run. The enum exists so the wire format names the
/// state explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The run was fully committed with all its payslips.
    Completed,
}

/// The immutable record of one committed payroll cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for the run.
    pub id: Uuid,
    /// The payroll period the run covers.
    pub period: Period,
    /// Operator-supplied title for the run.
    pub title: String,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Always `Completed` at commit time.
    pub status: RunStatus,
    /// Aggregate totals recomputed from the committed payslips.
    pub totals: PeriodTotals,
    /// Identity of the operator who committed the run.
    pub created_by: String,
    /// Commit timestamp.
    pub created_at: DateTime<Utc>,
}
