//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::audit::AuditSink;
use crate::config::CatalogLoader;
use crate::store::{PayrollDataSource, PayrollStore};

/// Shared application state.
///
/// Holds the external collaborators behind trait objects so tests can
/// swap in doubles, plus the loaded component catalog.
#[derive(Clone)]
pub struct AppState {
    data: Arc<dyn PayrollDataSource>,
    store: Arc<dyn PayrollStore>,
    audit: Arc<dyn AuditSink>,
    catalog: Arc<CatalogLoader>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        data: Arc<dyn PayrollDataSource>,
        store: Arc<dyn PayrollStore>,
        audit: Arc<dyn AuditSink>,
        catalog: CatalogLoader,
    ) -> Self {
        Self {
            data,
            store,
            audit,
            catalog: Arc::new(catalog),
        }
    }

    /// Returns the roster/attendance/leave/override data source.
    pub fn data(&self) -> &dyn PayrollDataSource {
        self.data.as_ref()
    }

    /// Returns the run and payslip store.
    pub fn store(&self) -> &dyn PayrollStore {
        self.store.as_ref()
    }

    /// Returns the audit sink.
    pub fn audit(&self) -> &dyn AuditSink {
        self.audit.as_ref()
    }

    /// Returns the loaded component catalog.
    pub fn catalog(&self) -> &CatalogLoader {
        &self.catalog
    }
}
