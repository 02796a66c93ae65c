//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation;
mod component;
mod employee;
mod leave;
mod payroll_run;
mod payslip;
mod period;

pub use attendance::{AttendanceCounts, AttendanceRecord, AttendanceStatus};
pub use calculation::{PayrollCalculation, PeriodTotals};
pub use component::{
    Applicability, CalculationMode, ComponentKind, ComponentOverride, ResolvedComponent,
    SalaryComponent, SalaryComponentInstance,
};
pub use employee::{Employee, StaffCategory};
pub use leave::ApprovedLeave;
pub use payroll_run::{PayrollRun, RunStatus};
pub use payslip::{Payslip, PayslipDraft, PayslipLine, PayslipStatus};
pub use period::Period;
