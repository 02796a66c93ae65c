//! Salary component models.
//!
//! This module defines the org-wide component catalog entries, the
//! per-employee overrides that suppress them, and the resolved
//! [`SalaryComponentInstance`] union the calculation engine consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StaffCategory;

/// Whether a component adds to or subtracts from pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Added to gross earnings.
    Earning,
    /// Subtracted as part of total deductions.
    Deduction,
}

/// How a component's amount is derived from its configured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// The configured value is the amount, as-is.
    FixedAmount,
    /// The configured value is a percentage of the employee's base salary.
    PercentageOfBase,
}

/// Which staff categories an org-wide default component applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    /// Applies to every employee.
    All,
    /// Applies to academic staff only.
    Academic,
    /// Applies to non-academic staff only.
    NonAcademic,
}

impl Applicability {
    /// Returns true if this component applies to the given staff category.
    pub fn matches(&self, category: StaffCategory) -> bool {
        match self {
            Applicability::All => true,
            Applicability::Academic => category == StaffCategory::Academic,
            Applicability::NonAcademic => category == StaffCategory::NonAcademic,
        }
    }
}

/// An org-wide default salary component from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryComponent {
    /// Unique identifier for the component.
    pub id: String,
    /// Display name (e.g. "House Rent Allowance").
    pub name: String,
    /// Earning or deduction.
    pub kind: ComponentKind,
    /// Fixed amount or percentage of base.
    pub mode: CalculationMode,
    /// The configured amount or percentage.
    pub value: Decimal,
    /// Which staff categories this default applies to.
    pub applicability: Applicability,
    /// Whether the component participates in calculation.
    pub is_active: bool,
}

/// A per-employee override of a catalog component.
///
/// When active, it fully replaces the org-wide default for that
/// employee/component pair; the default is suppressed, not added. The row
/// carries its own denormalized name/kind/mode snapshot so it remains
/// self-describing even if the catalog component is later deactivated or
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentOverride {
    /// The employee the override belongs to.
    pub employee_id: String,
    /// The catalog component being overridden.
    pub component_id: String,
    /// Denormalized display name snapshot.
    pub name: String,
    /// Denormalized kind snapshot.
    pub kind: ComponentKind,
    /// Denormalized calculation mode snapshot.
    pub mode: CalculationMode,
    /// The overriding value; falls back to the catalog value when unset.
    #[serde(default)]
    pub override_value: Option<Decimal>,
    /// Whether the override participates in resolution.
    pub is_active: bool,
}

/// The provenance-free payload of a resolved component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    /// The component id (catalog id, shared by overrides).
    pub component_id: String,
    /// Display name.
    pub name: String,
    /// Earning or deduction.
    pub kind: ComponentKind,
    /// Fixed amount or percentage of base.
    pub mode: CalculationMode,
    /// The value to evaluate (amount or percentage).
    pub value: Decimal,
}

/// A resolved component instance fed into calculation.
///
/// For a given employee and component id, exactly one of the two variants
/// exists, never both. The engine only reads [`Self::terms`] and is
/// agnostic to provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SalaryComponentInstance {
    /// Resolved from a per-employee override row.
    Override(ResolvedComponent),
    /// Resolved from the org-wide catalog default.
    Default(ResolvedComponent),
}

impl SalaryComponentInstance {
    /// The resolved terms, regardless of provenance.
    pub fn terms(&self) -> &ResolvedComponent {
        match self {
            SalaryComponentInstance::Override(terms) => terms,
            SalaryComponentInstance::Default(terms) => terms,
        }
    }

    /// Returns true if this instance came from an employee override.
    pub fn is_override(&self) -> bool {
        matches!(self, SalaryComponentInstance::Override(_))
    }
}
