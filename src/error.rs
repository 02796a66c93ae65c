//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation and
//! run commitment.

use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod { month: 13, year: 2026 };
/// assert_eq!(error.to_string(), "Invalid payroll period: month 13, year 2026");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested payroll period is malformed (month outside 1-12 or
    /// a nonsensical year). Callers should re-prompt, not retry.
    #[error("Invalid payroll period: month {month}, year {year}")]
    InvalidPeriod {
        /// The month that was supplied.
        month: u32,
        /// The year that was supplied.
        year: i32,
    },

    /// No employees matched the period/filter. Not a calculation failure,
    /// but committing a zero-payslip run requires explicit confirmation.
    #[error("No payslips to commit for period {month}/{year}")]
    EmptyRoster {
        /// The month of the period.
        month: u32,
        /// The year of the period.
        year: i32,
    },

    /// A persistence write failed partway through a commit. The committer
    /// attempts compensating cleanup before surfacing this error.
    #[error("Persistence failure during {stage}: {message}")]
    PersistenceFailure {
        /// The commit stage that failed (e.g. "insert_payslips").
        stage: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// A read collaborator (roster/attendance/leave store) was unavailable.
    /// Calculation fails closed rather than computing on partial data.
    #[error("Downstream source '{upstream}' unavailable: {message}")]
    DownstreamUnavailable {
        /// The collaborator that failed (e.g. "attendance").
        upstream: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// The component catalog file was not found at the specified path.
    #[error("Component catalog not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The component catalog file could not be parsed.
    #[error("Failed to parse component catalog '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
