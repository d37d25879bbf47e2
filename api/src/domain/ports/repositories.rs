//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Employee, EmployeeId, EmployeeInput, NewEmployee};
use crate::error::DomainError;

/// Repository for Employee entities
///
/// `insert` and `update` own the whole uniqueness-check-plus-write so an
/// implementation can make the pair atomic (one transaction per call). The
/// storage schema keeps a unique constraint on `employee_id` as the final
/// backstop; implementations surface a constraint trip as
/// `DomainError::DuplicateEmployeeId`, never as a generic database error.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by numeric id
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by the human-assigned identifier
    async fn find_by_employee_id(&self, employee_id: &str)
        -> Result<Option<Employee>, DomainError>;

    /// List all employees in primary-key order
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Insert a new employee, assigning id and timestamps.
    ///
    /// Fails with `DuplicateEmployeeId` when the record carries an
    /// identifier another employee already holds.
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;

    /// Merge the present fields of `input` into the stored record and
    /// refresh `updated_at`.
    ///
    /// Fails with `NotFound` when `id` does not exist, and with
    /// `DuplicateEmployeeId` when the requested identifier belongs to a
    /// different employee. Re-asserting the record's own identifier is
    /// never a conflict.
    async fn update(&self, id: &EmployeeId, input: &EmployeeInput)
        -> Result<Employee, DomainError>;

    /// Delete an employee permanently. Fails with `NotFound` when `id`
    /// does not exist.
    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError>;
}
