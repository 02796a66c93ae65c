//! In-memory reference implementation of the storage traits.
//!
//! Stands in for the hosted relational backend during tests, benchmarks
//! and local development. All collections live behind `RwLock`s; lock
//! poisoning is surfaced as a persistence/downstream failure rather than
//! a panic.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use super::{PayrollDataSource, PayrollStore};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ApprovedLeave, AttendanceRecord, ComponentOverride, Employee, Payslip, PayslipStatus,
    PayrollRun, Period,
};

/// In-memory implementation of [`PayrollDataSource`] and [`PayrollStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: RwLock<Vec<Employee>>,
    attendance: RwLock<Vec<AttendanceRecord>>,
    leave: RwLock<Vec<ApprovedLeave>>,
    overrides: RwLock<Vec<ComponentOverride>>,
    runs: RwLock<HashMap<Uuid, PayrollRun>>,
    payslips: RwLock<Vec<Payslip>>,
}

fn read_failure(upstream: &str) -> EngineError {
    EngineError::DownstreamUnavailable {
        upstream: upstream.to_string(),
        message: "store lock poisoned".to_string(),
    }
}

fn write_failure(stage: &str) -> EngineError {
    EngineError::PersistenceFailure {
        stage: stage.to_string(),
        message: "store lock poisoned".to_string(),
    }
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the employee roster.
    pub fn seed_employees(&self, employees: Vec<Employee>) {
        if let Ok(mut guard) = self.employees.write() {
            *guard = employees;
        }
    }

    /// Seeds attendance records.
    pub fn seed_attendance(&self, records: Vec<AttendanceRecord>) {
        if let Ok(mut guard) = self.attendance.write() {
            *guard = records;
        }
    }

    /// Seeds approved leave.
    pub fn seed_leave(&self, leave: Vec<ApprovedLeave>) {
        if let Ok(mut guard) = self.leave.write() {
            *guard = leave;
        }
    }

    /// Seeds component overrides.
    pub fn seed_overrides(&self, overrides: Vec<ComponentOverride>) {
        if let Ok(mut guard) = self.overrides.write() {
            *guard = overrides;
        }
    }
}

impl PayrollDataSource for InMemoryStore {
    fn roster(&self) -> EngineResult<Vec<Employee>> {
        Ok(self
            .employees
            .read()
            .map_err(|_| read_failure("roster"))?
            .clone())
    }

    fn attendance(&self, period: Period) -> EngineResult<Vec<AttendanceRecord>> {
        use chrono::Datelike;
        Ok(self
            .attendance
            .read()
            .map_err(|_| read_failure("attendance"))?
            .iter()
            .filter(|r| r.date.year() == period.year && r.date.month() == period.month)
            .cloned()
            .collect())
    }

    fn approved_leave(&self, period: Period) -> EngineResult<Vec<ApprovedLeave>> {
        use chrono::NaiveDate;
        let Some(month_start) = NaiveDate::from_ymd_opt(period.year, period.month, 1) else {
            return Ok(Vec::new());
        };
        let next_month = if period.month == 12 {
            NaiveDate::from_ymd_opt(period.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(period.year, period.month + 1, 1)
        };
        let Some(next_month) = next_month else {
            return Ok(Vec::new());
        };

        // A leave counts for the period if its date range overlaps the
        // month at all, including ranges that span the whole month.
        Ok(self
            .leave
            .read()
            .map_err(|_| read_failure("leave"))?
            .iter()
            .filter(|l| l.start_date < next_month && l.end_date >= month_start)
            .cloned()
            .collect())
    }

    fn overrides(&self) -> EngineResult<Vec<ComponentOverride>> {
        Ok(self
            .overrides
            .read()
            .map_err(|_| read_failure("overrides"))?
            .clone())
    }
}

impl PayrollStore for InMemoryStore {
    fn insert_run(&self, run: &PayrollRun) -> EngineResult<()> {
        self.runs
            .write()
            .map_err(|_| write_failure("insert_run"))?
            .insert(run.id, run.clone());
        Ok(())
    }

    fn insert_payslips(&self, payslips: &[Payslip]) -> EngineResult<()> {
        self.payslips
            .write()
            .map_err(|_| write_failure("insert_payslips"))?
            .extend_from_slice(payslips);
        Ok(())
    }

    fn delete_run(&self, run_id: Uuid) -> EngineResult<()> {
        self.runs
            .write()
            .map_err(|_| write_failure("delete_run"))?
            .remove(&run_id);
        self.payslips
            .write()
            .map_err(|_| write_failure("delete_run"))?
            .retain(|p| p.run_id != run_id);
        Ok(())
    }

    fn get_run(&self, run_id: Uuid) -> EngineResult<Option<PayrollRun>> {
        Ok(self
            .runs
            .read()
            .map_err(|_| read_failure("runs"))?
            .get(&run_id)
            .cloned())
    }

    fn list_runs(&self) -> EngineResult<Vec<PayrollRun>> {
        let mut runs: Vec<PayrollRun> = self
            .runs
            .read()
            .map_err(|_| read_failure("runs"))?
            .values()
            .cloned()
            .collect();
        runs.sort_by_key(|r| r.created_at);
        Ok(runs)
    }

    fn payslips_for_run(&self, run_id: Uuid) -> EngineResult<Vec<Payslip>> {
        Ok(self
            .payslips
            .read()
            .map_err(|_| read_failure("payslips"))?
            .iter()
            .filter(|p| p.run_id == run_id)
            .cloned()
            .collect())
    }

    fn update_payslip_status(
        &self,
        payslip_id: Uuid,
        status: PayslipStatus,
    ) -> EngineResult<bool> {
        let mut payslips = self
            .payslips
            .write()
            .map_err(|_| write_failure("update_payslip_status"))?;
        match payslips.iter_mut().find(|p| p.id == payslip_id) {
            Some(payslip) => {
                payslip.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
