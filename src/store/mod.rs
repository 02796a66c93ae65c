//! Storage seams for the payroll core.
//!
//! The surrounding application owns the real database; this crate only
//! defines the trait boundaries it consumes: synchronous read access to
//! roster/attendance/leave/override data, and write access for committed
//! runs and payslips. An in-memory reference implementation backs the API
//! state, tests and benchmarks.

mod memory;

pub use memory::InMemoryStore;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    ApprovedLeave, AttendanceRecord, ComponentOverride, Employee, Payslip, PayslipStatus,
    PayrollRun, Period,
};

/// Read access to the external roster/attendance/leave/override stores.
///
/// Implementations must fail with
/// [`crate::error::EngineError::DownstreamUnavailable`] rather than
/// return partial data; `calculate` fails closed on any read error.
pub trait PayrollDataSource: Send + Sync {
    /// Fetches the full employee roster.
    fn roster(&self) -> EngineResult<Vec<Employee>>;

    /// Fetches all attendance records for the period.
    fn attendance(&self, period: Period) -> EngineResult<Vec<AttendanceRecord>>;

    /// Fetches all approved leave overlapping the period.
    fn approved_leave(&self, period: Period) -> EngineResult<Vec<ApprovedLeave>>;

    /// Fetches all per-employee component overrides.
    fn overrides(&self) -> EngineResult<Vec<ComponentOverride>>;
}

/// Write and read access for committed payroll runs and payslips.
///
/// The store is not required to provide multi-row transactional
/// atomicity; the committer compensates by deleting the run when payslip
/// insertion fails partway.
pub trait PayrollStore: Send + Sync {
    /// Inserts a new payroll run.
    fn insert_run(&self, run: &PayrollRun) -> EngineResult<()>;

    /// Inserts the payslips belonging to a run.
    fn insert_payslips(&self, payslips: &[Payslip]) -> EngineResult<()>;

    /// Deletes a run and any payslips already written for it.
    /// Compensating cleanup for a partial commit.
    fn delete_run(&self, run_id: Uuid) -> EngineResult<()>;

    /// Fetches a run by id, if it exists.
    fn get_run(&self, run_id: Uuid) -> EngineResult<Option<PayrollRun>>;

    /// Lists all committed runs.
    fn list_runs(&self) -> EngineResult<Vec<PayrollRun>>;

    /// Fetches the payslips belonging to a run.
    fn payslips_for_run(&self, run_id: Uuid) -> EngineResult<Vec<Payslip>>;

    /// Updates the lifecycle status of one payslip, the only field of a
    /// committed payslip that may change. Returns true if the payslip
    /// existed.
    fn update_payslip_status(&self, payslip_id: Uuid, status: PayslipStatus)
    -> EngineResult<bool>;
}
