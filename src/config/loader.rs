//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading salary
//! component definitions from a YAML file.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryComponent;

/// Top-level shape of the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    components: Vec<SalaryComponent>,
}

/// Loads and provides access to the salary component catalog.
///
/// The `CatalogLoader` reads a YAML catalog file and provides methods to
/// query component definitions. The catalog is the org-wide default set;
/// per-employee deviations live as overrides in the component store, not
/// here.
///
/// # File Structure
///
/// ```text
/// config/
/// └── components.yaml   # Salary component definitions
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./config/components.yaml").unwrap();
///
/// for component in catalog.active_components() {
///     println!("{}: {:?} ({:?})", component.name, component.kind, component.mode);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    components: Vec<SalaryComponent>,
}

impl CatalogLoader {
    /// Loads the component catalog from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog file (e.g., "./config/components.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - Any required field is missing from a component definition
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::CatalogLoader;
    ///
    /// let catalog = CatalogLoader::load("./config/components.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        let file: CatalogFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self {
            components: file.components,
        })
    }

    /// Builds a loader from an already-materialized component list.
    ///
    /// Used by tests and by callers that source the catalog from
    /// somewhere other than a file.
    pub fn from_components(components: Vec<SalaryComponent>) -> Self {
        Self { components }
    }

    /// Returns every component in the catalog, active or not.
    pub fn components(&self) -> &[SalaryComponent] {
        &self.components
    }

    /// Returns the active components, in catalog order.
    pub fn active_components(&self) -> Vec<&SalaryComponent> {
        self.components.iter().filter(|c| c.is_active).collect()
    }

    /// Gets a component by its id.
    pub fn get(&self, id: &str) -> Option<&SalaryComponent> {
        self.components.iter().find(|c| c.id == id)
    }
}
