//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{Employee, EmployeeId, EmployeeInput};

/// A valid create/update input with only the required fields present
pub fn employee_input(name: &str) -> EmployeeInput {
    EmployeeInput {
        name: Some(name.to_string()),
        department: Some("Eng".to_string()),
        role: Some("Dev".to_string()),
        ..Default::default()
    }
}

/// A valid input carrying a human-assigned identifier
pub fn employee_input_with_id(name: &str, employee_id: &str) -> EmployeeInput {
    EmployeeInput {
        employee_id: Some(employee_id.to_string()),
        ..employee_input(name)
    }
}

/// A fully-populated stored employee
pub fn test_employee() -> Employee {
    let now = Utc::now();
    Employee {
        id: EmployeeId(1),
        employee_id: Some("E1".to_string()),
        name: "Ana".to_string(),
        department: "Eng".to_string(),
        role: "Dev".to_string(),
        skills: Some("Rust, SQL".to_string()),
        skill_level: 5,
        experience: 3.5,
        category: "Full-time".to_string(),
        availability: "Available".to_string(),
        performance_rating: 7.0,
        status: "Present".to_string(),
        created_at: now,
        updated_at: now,
    }
}
