//! Employee domain entity
//!
//! The persisted employee record, the input shape accepted at the system
//! boundary, and the validation and default-value policy applied to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an employee, assigned by the database sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub i64);

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const DEFAULT_SKILL_LEVEL: i32 = 1;
pub const DEFAULT_EXPERIENCE: f64 = 0.0;
pub const DEFAULT_CATEGORY: &str = "Full-time";
pub const DEFAULT_AVAILABILITY: &str = "Available";
pub const DEFAULT_PERFORMANCE_RATING: f64 = 0.0;
pub const DEFAULT_STATUS: &str = "Present";

/// An employee record
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// Human-assigned identifier, unique across all employees when present
    pub employee_id: Option<String>,
    pub name: String,
    pub department: String,
    pub role: String,
    pub skills: Option<String>,
    pub skill_level: i32,
    pub experience: f64,
    pub category: String,
    pub availability: String,
    pub performance_rating: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Merge the fields present in `input` into this record.
    ///
    /// Absent fields are left untouched. A present-but-blank `employee_id`
    /// clears the stored identifier. Timestamps are not touched here; the
    /// repository refreshes `updated_at` when it writes.
    pub fn apply(&mut self, input: &EmployeeInput) {
        if let Some(employee_id) = &input.employee_id {
            self.employee_id = if employee_id.trim().is_empty() {
                None
            } else {
                Some(employee_id.clone())
            };
        }
        if let Some(name) = &input.name {
            self.name = name.clone();
        }
        if let Some(department) = &input.department {
            self.department = department.clone();
        }
        if let Some(role) = &input.role {
            self.role = role.clone();
        }
        if let Some(skills) = &input.skills {
            self.skills = Some(skills.clone());
        }
        if let Some(skill_level) = input.skill_level {
            self.skill_level = skill_level;
        }
        if let Some(experience) = input.experience {
            self.experience = experience;
        }
        if let Some(category) = &input.category {
            self.category = category.clone();
        }
        if let Some(availability) = &input.availability {
            self.availability = availability.clone();
        }
        if let Some(performance_rating) = input.performance_rating {
            self.performance_rating = performance_rating;
        }
        if let Some(status) = &input.status {
            self.status = status.clone();
        }
    }
}

/// Data needed to insert a new employee: validated, with defaults applied
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_id: Option<String>,
    pub name: String,
    pub department: String,
    pub role: String,
    pub skills: Option<String>,
    pub skill_level: i32,
    pub experience: f64,
    pub category: String,
    pub availability: String,
    pub performance_rating: f64,
    pub status: String,
}

/// Incoming employee data, used for both create and update.
///
/// Every field is optional at the type level; create-mode validation
/// requires `name`, `department` and `role`.
#[derive(Debug, Clone, Default)]
pub struct EmployeeInput {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub skills: Option<String>,
    pub skill_level: Option<i32>,
    pub experience: Option<f64>,
    pub category: Option<String>,
    pub availability: Option<String>,
    pub performance_rating: Option<f64>,
    pub status: Option<String>,
}

/// A single field-level constraint violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The full set of violations found in one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl EmployeeInput {
    /// The identifier this input asks for, with blank normalized to absent
    pub fn requested_employee_id(&self) -> Option<&str> {
        self.employee_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// Validate in create mode and build the record to insert.
    ///
    /// Requires `name`, `department` and `role`; fills every absent
    /// optional field with its documented default. All violations are
    /// collected before returning, so a caller sees the whole list at once.
    pub fn into_new(self) -> Result<NewEmployee, ValidationErrors> {
        let mut violations = Vec::new();

        let name = require_string(&self.name, "name", "Name is required", &mut violations);
        let department = require_string(
            &self.department,
            "department",
            "Department is required",
            &mut violations,
        );
        let role = require_string(&self.role, "role", "Role is required", &mut violations);
        self.check_bounds(&mut violations);

        match (name, department, role) {
            (Some(name), Some(department), Some(role)) if violations.is_empty() => {
                Ok(NewEmployee {
                    employee_id: self.requested_employee_id().map(str::to_string),
                    name,
                    department,
                    role,
                    skills: self.skills,
                    skill_level: self.skill_level.unwrap_or(DEFAULT_SKILL_LEVEL),
                    experience: self.experience.unwrap_or(DEFAULT_EXPERIENCE),
                    category: self.category.unwrap_or_else(|| DEFAULT_CATEGORY.into()),
                    availability: self
                        .availability
                        .unwrap_or_else(|| DEFAULT_AVAILABILITY.into()),
                    performance_rating: self
                        .performance_rating
                        .unwrap_or(DEFAULT_PERFORMANCE_RATING),
                    status: self.status.unwrap_or_else(|| DEFAULT_STATUS.into()),
                })
            }
            _ => Err(ValidationErrors(violations)),
        }
    }

    /// Validate in update mode: only the fields present are checked.
    ///
    /// A present `name`/`department`/`role` must still be non-blank and
    /// within bounds; absent fields mean "leave the stored value alone".
    pub fn validate_update(&self) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                violations.push(FieldViolation::new("name", "Name is required"));
            }
        }
        if let Some(department) = &self.department {
            if department.trim().is_empty() {
                violations.push(FieldViolation::new("department", "Department is required"));
            }
        }
        if let Some(role) = &self.role {
            if role.trim().is_empty() {
                violations.push(FieldViolation::new("role", "Role is required"));
            }
        }
        self.check_bounds(&mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }

    /// Bounds checks shared by both modes, applied to present fields only
    fn check_bounds(&self, violations: &mut Vec<FieldViolation>) {
        if let Some(name) = &self.name {
            let len = name.chars().count();
            if !name.trim().is_empty() && !(2..=100).contains(&len) {
                violations.push(FieldViolation::new(
                    "name",
                    "Name must be between 2 and 100 characters",
                ));
            }
        }
        if let Some(department) = &self.department {
            if department.chars().count() > 50 {
                violations.push(FieldViolation::new(
                    "department",
                    "Department must not exceed 50 characters",
                ));
            }
        }
        if let Some(role) = &self.role {
            if role.chars().count() > 100 {
                violations.push(FieldViolation::new(
                    "role",
                    "Role must not exceed 100 characters",
                ));
            }
        }
        if let Some(skills) = &self.skills {
            if skills.chars().count() > 1000 {
                violations.push(FieldViolation::new(
                    "skills",
                    "Skills must not exceed 1000 characters",
                ));
            }
        }
        if let Some(skill_level) = self.skill_level {
            if skill_level < 1 {
                violations.push(FieldViolation::new(
                    "skillLevel",
                    "Skill level must be at least 1",
                ));
            } else if skill_level > 10 {
                violations.push(FieldViolation::new(
                    "skillLevel",
                    "Skill level must be at most 10",
                ));
            }
        }
        if let Some(experience) = self.experience {
            if experience < 0.0 {
                violations.push(FieldViolation::new(
                    "experience",
                    "Experience cannot be negative",
                ));
            }
        }
        if let Some(category) = &self.category {
            if category.chars().count() > 50 {
                violations.push(FieldViolation::new(
                    "category",
                    "Category must not exceed 50 characters",
                ));
            }
        }
        if let Some(availability) = &self.availability {
            if availability.chars().count() > 50 {
                violations.push(FieldViolation::new(
                    "availability",
                    "Availability must not exceed 50 characters",
                ));
            }
        }
        if let Some(performance_rating) = self.performance_rating {
            if performance_rating < 0.0 {
                violations.push(FieldViolation::new(
                    "performanceRating",
                    "Performance rating cannot be negative",
                ));
            } else if performance_rating > 10.0 {
                violations.push(FieldViolation::new(
                    "performanceRating",
                    "Performance rating must be at most 10",
                ));
            }
        }
        if let Some(status) = &self.status {
            if status.chars().count() > 50 {
                violations.push(FieldViolation::new(
                    "status",
                    "Status must not exceed 50 characters",
                ));
            }
        }
    }
}

fn require_string(
    value: &Option<String>,
    field: &'static str,
    message: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => {
            violations.push(FieldViolation::new(field, message));
            None
        }
    }
}
