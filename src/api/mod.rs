//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for previewing payroll
//! calculations, committing payroll runs, and fetching committed runs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, CommitRequest};
pub use response::{ApiError, RunResponse};
pub use state::AppState;
