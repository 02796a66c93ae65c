//! Component catalog loading.
//!
//! This module provides the [`CatalogLoader`] type for loading the
//! org-wide salary component catalog from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./config/components.yaml").unwrap();
//! println!("Loaded {} components", catalog.components().len());
//! ```

mod loader;

pub use loader::CatalogLoader;
