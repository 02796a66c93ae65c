//! Component resolution.
//!
//! Merges the org-wide component catalog with per-employee overrides into
//! the ordered [`SalaryComponentInstance`] lists the calculation engine
//! consumes. Precedence is decided here, once; the engine never sees
//! whether a value came from an override or a default.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::models::{
    ComponentOverride, Employee, ResolvedComponent, SalaryComponent, SalaryComponentInstance,
};

/// Resolves the component list for one employee.
///
/// 1. Active overrides for the employee form an exclusion set of
///    component ids.
/// 2. Active catalog defaults whose applicability is "all" or matches the
///    employee's staff category are selected, minus the exclusion set.
/// 3. The result is all active overrides first, then the filtered
///    defaults. The ordering is preserved into payslip line lists; it
///    matters for display, not for monetary correctness.
///
/// An override pointing at an inactive or deleted catalog component is
/// still honored as long as the override row itself is active: the row's
/// own denormalized name/kind/mode snapshot is trusted rather than
/// re-validated against the live catalog. Its value falls back to the
/// catalog value when `override_value` is unset, or to zero when the
/// catalog row no longer exists.
pub fn resolve_components(
    employee: &Employee,
    catalog: &[SalaryComponent],
    overrides: &[ComponentOverride],
) -> Vec<SalaryComponentInstance> {
    let active_overrides: Vec<&ComponentOverride> = overrides
        .iter()
        .filter(|o| o.is_active && o.employee_id == employee.id)
        .collect();

    let excluded: HashSet<&str> = active_overrides
        .iter()
        .map(|o| o.component_id.as_str())
        .collect();

    let mut resolved: Vec<SalaryComponentInstance> = active_overrides
        .iter()
        .map(|o| {
            let value = o
                .override_value
                .or_else(|| {
                    catalog
                        .iter()
                        .find(|c| c.id == o.component_id)
                        .map(|c| c.value)
                })
                .unwrap_or(Decimal::ZERO);
            SalaryComponentInstance::Override(ResolvedComponent {
                component_id: o.component_id.clone(),
                name: o.name.clone(),
                kind: o.kind,
                mode: o.mode,
                value,
            })
        })
        .collect();

    resolved.extend(
        catalog
            .iter()
            .filter(|c| {
                c.is_active
                    && c.applicability.matches(employee.staff_category)
                    && !excluded.contains(c.id.as_str())
            })
            .map(|c| {
                SalaryComponentInstance::Default(ResolvedComponent {
                    component_id: c.id.clone(),
                    name: c.name.clone(),
                    kind: c.kind,
                    mode: c.mode,
                    value: c.value,
                })
            }),
    );

    resolved
}

/// Resolves component lists for a whole roster, keyed by employee id.
pub fn resolve_roster(
    roster: &[Employee],
    catalog: &[SalaryComponent],
    overrides: &[ComponentOverride],
) -> HashMap<String, Vec<SalaryComponentInstance>> {
    roster
        .iter()
        .map(|employee| {
            (
                employee.id.clone(),
                resolve_components(employee, catalog, overrides),
            )
        })
        .collect()
}
