//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod employee_repo;

#[cfg(test)]
mod integration_tests;

pub use employee_repo::PostgresEmployeeRepository;
