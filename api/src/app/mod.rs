//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod employee_service;

pub use employee_service::EmployeeService;
