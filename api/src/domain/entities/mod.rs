//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod employee;

pub use employee::{
    Employee, EmployeeId, EmployeeInput, FieldViolation, NewEmployee, ValidationErrors,
    DEFAULT_AVAILABILITY, DEFAULT_CATEGORY, DEFAULT_EXPERIENCE, DEFAULT_PERFORMANCE_RATING,
    DEFAULT_SKILL_LEVEL, DEFAULT_STATUS,
};
