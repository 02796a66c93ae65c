//! Run commitment.
//!
//! Persists an operator-approved set of payslip drafts as one immutable
//! [`PayrollRun`] plus its [`Payslip`] rows. Either the run and all of
//! its payslips become visible together, or neither does: when payslip
//! insertion fails partway the freshly created run is deleted again
//! before the error is surfaced.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::{AuditEvent, AuditSink};
use crate::calculation::round2;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Payslip, PayslipDraft, PayslipStatus, PayrollRun, PeriodTotals, Period, RunStatus,
};
use crate::store::PayrollStore;

/// Metadata accompanying a commit request.
///
/// The committing operator's identity travels explicitly here, never as
/// ambient session state.
#[derive(Debug, Clone)]
pub struct CommitParams {
    /// The period the run covers.
    pub period: Period,
    /// Operator-supplied title for the run.
    pub title: String,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// Identity of the committing operator.
    pub created_by: String,
}

/// Recomputes aggregate totals from a draft list.
///
/// Caller-supplied aggregates are never trusted; totals are always
/// re-derived from the drafts to guard against stale client state. Each
/// total is re-rounded to 2 decimal places after summation.
pub fn totals_from_drafts(drafts: &[PayslipDraft]) -> PeriodTotals {
    PeriodTotals {
        employee_count: drafts.len() as u32,
        total_gross: round2(drafts.iter().map(|d| d.gross_earnings).sum::<Decimal>()),
        total_deductions: round2(drafts.iter().map(|d| d.total_deductions).sum::<Decimal>()),
        total_net: round2(drafts.iter().map(|d| d.net_pay).sum::<Decimal>()),
    }
}

/// Commits a reviewed draft list as a new payroll run.
///
/// There is no intermediate "pending" run state: the run is created
/// directly in [`RunStatus::Completed`], and its payslips in
/// [`PayslipStatus::Generated`]. No uniqueness check is performed on the
/// period: committing the same period twice deliberately creates two
/// independent runs, since corrections are expected to produce a new run
/// rather than mutate history.
///
/// An empty draft list is rejected with
/// [`EngineError::EmptyRoster`] unless `confirm_empty` is set, so a
/// zero-employee run can only happen on explicit operator confirmation.
///
/// On success a `payroll_run_committed` audit event is emitted.
/// Audit delivery is best-effort: a failed audit write is logged as a
/// warning and does not affect the committed run.
pub fn commit_run(
    store: &dyn PayrollStore,
    audit: &dyn AuditSink,
    params: CommitParams,
    drafts: Vec<PayslipDraft>,
    confirm_empty: bool,
) -> EngineResult<PayrollRun> {
    params.period.validate()?;

    if drafts.is_empty() && !confirm_empty {
        return Err(EngineError::EmptyRoster {
            month: params.period.month,
            year: params.period.year,
        });
    }

    let run = PayrollRun {
        id: Uuid::new_v4(),
        period: params.period,
        title: params.title,
        notes: params.notes,
        status: RunStatus::Completed,
        totals: totals_from_drafts(&drafts),
        created_by: params.created_by,
        created_at: Utc::now(),
    };

    let payslips: Vec<Payslip> = drafts
        .into_iter()
        .map(|draft| Payslip {
            id: Uuid::new_v4(),
            run_id: run.id,
            status: PayslipStatus::Generated,
            breakdown: draft,
        })
        .collect();

    store.insert_run(&run)?;

    if let Err(error) = store.insert_payslips(&payslips) {
        // Compensating cleanup: never leave an orphaned run visible.
        if let Err(cleanup_error) = store.delete_run(run.id) {
            warn!(
                run_id = %run.id,
                error = %cleanup_error,
                "failed to clean up orphaned run after payslip insert failure"
            );
        }
        return Err(error);
    }

    info!(
        run_id = %run.id,
        period = %run.period,
        employee_count = run.totals.employee_count,
        total_net = %run.totals.total_net,
        "payroll run committed"
    );

    let event = AuditEvent {
        action: "payroll_run_committed".to_string(),
        entity_type: "payroll_run".to_string(),
        entity_id: run.id.to_string(),
        metadata: serde_json::json!({
            "month": run.period.month,
            "year": run.period.year,
            "employee_count": run.totals.employee_count,
            "total_net": run.totals.total_net.to_string(),
        }),
    };
    if let Err(error) = audit.record(event) {
        warn!(run_id = %run.id, error = %error, "audit write failed; run remains committed");
    }

    Ok(run)
}
