//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod employees;

pub use employees::{
    create_employee, delete_employee, get_employee, get_employee_by_employee_id, list_employees,
    update_employee,
};
