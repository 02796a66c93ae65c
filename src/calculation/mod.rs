//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains all the calculation functions for producing
//! payslip drafts, including working-day counting, attendance
//! summarization, attendance-based proration, component line evaluation,
//! per-employee payslip assembly, and the roster-level engine entry point.

mod attendance;
mod attendance_deduction;
mod component_amount;
mod engine;
mod payslip;
mod rounding;
mod working_days;

pub use attendance::{absent_days, effective_present_days, summarize_attendance};
pub use attendance_deduction::attendance_deduction;
pub use component_amount::component_line;
pub use engine::calculate;
pub use payslip::{ATTENDANCE_DEDUCTION_ID, calculate_payslip};
pub use rounding::round2;
pub use working_days::working_days_in_month;
