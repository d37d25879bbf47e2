//! PostgreSQL adapter for EmployeeRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr, TransactionTrait,
};

use crate::domain::entities::{Employee, EmployeeId, EmployeeInput, NewEmployee};
use crate::domain::ports::EmployeeRepository;
use crate::entity::employees;
use crate::error::DomainError;

/// PostgreSQL implementation of EmployeeRepository
///
/// Each mutating call runs its uniqueness pre-check and write inside one
/// transaction; the unique index on `employee_id` is the final backstop
/// against writers racing past the pre-check.
pub struct PostgresEmployeeRepository {
    db: DatabaseConnection,
}

impl PostgresEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Map a write failure, folding a tripped unique constraint into the
/// duplicate-identifier error so a lost race still surfaces as a 409.
fn write_err(e: sea_orm::DbErr, employee_id: Option<&str>) -> DomainError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        DomainError::DuplicateEmployeeId(employee_id.unwrap_or_default().to_string())
    } else {
        DomainError::Database(e.to_string())
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find()
            .filter(employees::Column::EmployeeId.eq(employee_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let results = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        if let Some(employee_id) = &employee.employee_id {
            let existing = employees::Entity::find()
                .filter(employees::Column::EmployeeId.eq(employee_id))
                .one(&txn)
                .await
                .map_err(db_err)?;
            if existing.is_some() {
                return Err(DomainError::DuplicateEmployeeId(employee_id.clone()));
            }
        }

        let now = Utc::now().fixed_offset();
        let model = employees::ActiveModel {
            employee_id: Set(employee.employee_id.clone()),
            name: Set(employee.name.clone()),
            department: Set(employee.department.clone()),
            role: Set(employee.role.clone()),
            skills: Set(employee.skills.clone()),
            skill_level: Set(employee.skill_level),
            experience: Set(employee.experience),
            category: Set(employee.category.clone()),
            availability: Set(employee.availability.clone()),
            performance_rating: Set(employee.performance_rating),
            status: Set(employee.status.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| write_err(e, employee.employee_id.as_deref()))?;
        txn.commit().await.map_err(db_err)?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &EmployeeId,
        input: &EmployeeInput,
    ) -> Result<Employee, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let model = employees::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::NotFound(format!("Employee {} not found", id)))?;

        if let Some(requested) = input.requested_employee_id() {
            let taken = employees::Entity::find()
                .filter(employees::Column::EmployeeId.eq(requested))
                .filter(employees::Column::Id.ne(id.0))
                .one(&txn)
                .await
                .map_err(db_err)?;
            if taken.is_some() {
                return Err(DomainError::DuplicateEmployeeId(requested.to_string()));
            }
        }

        let mut employee: Employee = model.into();
        employee.apply(input);
        employee.updated_at = Utc::now();

        let active = employees::ActiveModel {
            id: Set(id.0),
            employee_id: Set(employee.employee_id.clone()),
            name: Set(employee.name.clone()),
            department: Set(employee.department.clone()),
            role: Set(employee.role.clone()),
            skills: Set(employee.skills.clone()),
            skill_level: Set(employee.skill_level),
            experience: Set(employee.experience),
            category: Set(employee.category.clone()),
            availability: Set(employee.availability.clone()),
            performance_rating: Set(employee.performance_rating),
            status: Set(employee.status.clone()),
            created_at: Set(employee.created_at.fixed_offset()),
            updated_at: Set(employee.updated_at.fixed_offset()),
        };

        let result = active
            .update(&txn)
            .await
            .map_err(|e| write_err(e, input.requested_employee_id()))?;
        txn.commit().await.map_err(db_err)?;

        Ok(result.into())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError> {
        let result = employees::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!(
                "Employee {} not found",
                id
            )))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Employee {
            id: EmployeeId(model.id),
            employee_id: model.employee_id,
            name: model.name,
            department: model.department,
            role: model.role,
            skills: model.skills,
            skill_level: model.skill_level,
            experience: model.experience,
            category: model.category,
            availability: model.availability,
            performance_rating: model.performance_rating,
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
