//! Employee service
//!
//! Orchestrates validation, the default-value policy, and uniqueness of the
//! human-assigned identifier over the repository port.

use std::sync::Arc;

use crate::domain::entities::{Employee, EmployeeId, EmployeeInput};
use crate::domain::ports::EmployeeRepository;
use crate::error::{AppError, DomainError};

/// Service for managing employee records
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    employees: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(employees: Arc<ER>) -> Self {
        Self { employees }
    }

    /// Create a new employee record.
    ///
    /// Validates the input, applies defaults for absent optional fields,
    /// and persists. A non-blank `employee_id` already held by another
    /// employee fails with `DuplicateEmployeeId`; a blank one is stored as
    /// absent.
    pub async fn create(&self, input: EmployeeInput) -> Result<Employee, AppError> {
        let new_employee = input
            .into_new()
            .map_err(|e| AppError::Domain(DomainError::Validation(e)))?;
        Ok(self.employees.insert(&new_employee).await?)
    }

    /// Fetch an employee by numeric id
    pub async fn get(&self, id: EmployeeId) -> Result<Employee, AppError> {
        self.employees
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(&id))
    }

    /// Fetch an employee by the human-assigned identifier
    pub async fn get_by_employee_id(&self, employee_id: &str) -> Result<Employee, AppError> {
        self.employees
            .find_by_employee_id(employee_id)
            .await?
            .ok_or_else(|| {
                AppError::Domain(DomainError::NotFound(format!(
                    "Employee {} not found",
                    employee_id
                )))
            })
    }

    /// List all employees
    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.find_all().await?)
    }

    /// Update an employee record with partial-field semantics.
    ///
    /// Fields present in the input overwrite stored values; absent fields
    /// are left unchanged and defaults are never re-applied. Setting the
    /// record's own `employee_id` again is not a conflict; a blank one
    /// clears the stored identifier.
    pub async fn update(
        &self,
        id: EmployeeId,
        input: EmployeeInput,
    ) -> Result<Employee, AppError> {
        input
            .validate_update()
            .map_err(|e| AppError::Domain(DomainError::Validation(e)))?;
        Ok(self.employees.update(&id, &input).await?)
    }

    /// Delete an employee permanently
    pub async fn delete(&self, id: EmployeeId) -> Result<(), AppError> {
        self.employees.delete(&id).await?;
        Ok(())
    }
}

fn not_found(id: &EmployeeId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Employee {} not found", id)))
}
