//! Payroll Calculation Engine for school payroll/HR administration.
//!
//! This crate implements the payroll core: a pure calculation engine that
//! turns a roster, attendance records, approved leave and resolved salary
//! components into payslip drafts, and a run committer that persists an
//! operator-approved set of drafts as an immutable payroll run.

#![warn(missing_docs)]

pub mod api;
pub mod audit;
pub mod calculation;
pub mod committer;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod store;
