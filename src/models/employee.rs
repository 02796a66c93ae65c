//! Employee model and related types.
//!
//! This module defines the Employee struct and StaffCategory enum for
//! representing roster entries fed into the payroll engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The staff category an employee belongs to.
///
/// Determines which org-wide default salary components apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    /// Teaching staff.
    Academic,
    /// Administrative and support staff.
    NonAcademic,
}

/// Represents an employee on the payroll roster.
///
/// Read-only input to the engine; owned by HR administration outside
/// this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The configured recurring monthly salary before components.
    pub base_salary: Decimal,
    /// The staff category, which selects applicable default components.
    pub staff_category: StaffCategory,
    /// Whether the employee is currently employed and payable.
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_academic_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Asha Rahman",
            "base_salary": "3000.00",
            "staff_category": "academic",
            "is_active": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Asha Rahman");
        assert_eq!(employee.base_salary, Decimal::from_str("3000.00").unwrap());
        assert_eq!(employee.staff_category, StaffCategory::Academic);
        assert!(employee.is_active);
    }

    #[test]
    fn test_deserialize_non_academic_employee() {
        let json = r#"{
            "id": "emp_002",
            "name": "Jamal Uddin",
            "base_salary": "1800.50",
            "staff_category": "non_academic",
            "is_active": false
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.staff_category, StaffCategory::NonAcademic);
        assert!(!employee.is_active);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = Employee {
            id: "emp_003".to_string(),
            name: "Maria Costa".to_string(),
            base_salary: Decimal::new(250075, 2),
            staff_category: StaffCategory::Academic,
            is_active: true,
        };

        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn test_staff_category_serialization() {
        assert_eq!(
            serde_json::to_string(&StaffCategory::Academic).unwrap(),
            "\"academic\""
        );
        assert_eq!(
            serde_json::to_string(&StaffCategory::NonAcademic).unwrap(),
            "\"non_academic\""
        );
    }
}
