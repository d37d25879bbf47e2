//! Mock implementations of port traits
//!
//! In-memory repository honoring the same contract as the PostgreSQL
//! adapter: identifier uniqueness, NotFound on missing ids, partial-field
//! merge, and timestamp refresh on update.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Employee, EmployeeId, EmployeeInput, NewEmployee};
use crate::domain::ports::EmployeeRepository;
use crate::error::DomainError;

/// In-memory EmployeeRepository
///
/// A BTreeMap keyed by id keeps `find_all` in primary-key order, matching
/// the adapter's ordered query.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<BTreeMap<i64, Employee>>>,
    next_id: AtomicI64,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an employee for testing
    pub fn with_employee(self, employee: Employee) -> Self {
        {
            let mut employees = self.employees.write().unwrap();
            self.next_id.fetch_max(employee.id.0, Ordering::SeqCst);
            employees.insert(employee.id.0, employee);
        }
        self
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees.get(&id.0).cloned())
    }

    async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees
            .values()
            .find(|e| e.employee_id.as_deref() == Some(employee_id))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees.values().cloned().collect())
    }

    async fn insert(&self, new_employee: &NewEmployee) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().unwrap();

        if let Some(employee_id) = &new_employee.employee_id {
            if employees
                .values()
                .any(|e| e.employee_id.as_deref() == Some(employee_id))
            {
                return Err(DomainError::DuplicateEmployeeId(employee_id.clone()));
            }
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId(id),
            employee_id: new_employee.employee_id.clone(),
            name: new_employee.name.clone(),
            department: new_employee.department.clone(),
            role: new_employee.role.clone(),
            skills: new_employee.skills.clone(),
            skill_level: new_employee.skill_level,
            experience: new_employee.experience,
            category: new_employee.category.clone(),
            availability: new_employee.availability.clone(),
            performance_rating: new_employee.performance_rating,
            status: new_employee.status.clone(),
            created_at: now,
            updated_at: now,
        };

        employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        input: &EmployeeInput,
    ) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().unwrap();

        if !employees.contains_key(&id.0) {
            return Err(DomainError::NotFound(format!(
                "Employee {} not found",
                id
            )));
        }

        if let Some(requested) = input.requested_employee_id() {
            let taken = employees
                .values()
                .any(|e| e.id.0 != id.0 && e.employee_id.as_deref() == Some(requested));
            if taken {
                return Err(DomainError::DuplicateEmployeeId(requested.to_string()));
            }
        }

        let employee = employees
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound(format!("Employee {} not found", id)))?;
        employee.apply(input);
        employee.updated_at = Utc::now();
        Ok(employee.clone())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError> {
        let mut employees = self.employees.write().unwrap();
        if employees.remove(&id.0).is_none() {
            Err(DomainError::NotFound(format!(
                "Employee {} not found",
                id
            )))
        } else {
            Ok(())
        }
    }
}
