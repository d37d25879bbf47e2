//! Employee handlers
//!
//! Endpoints for employee record management. The wire shapes use camelCase
//! field names; timestamps are RFC 3339 strings.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Employee, EmployeeId, EmployeeInput};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating and updating employees.
///
/// Every field is optional at the wire level; create requires `name`,
/// `department` and `role`, update treats absent fields as "leave
/// unchanged".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
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

impl From<EmployeeRequest> for EmployeeInput {
    fn from(request: EmployeeRequest) -> Self {
        EmployeeInput {
            employee_id: request.employee_id,
            name: request.name,
            department: request.department,
            role: request.role,
            skills: request.skills,
            skill_level: request.skill_level,
            experience: request.experience,
            category: request.category,
            availability: request.availability,
            performance_rating: request.performance_rating,
            status: request.status,
        }
    }
}

/// Response body for all read/write outputs
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
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
    pub created_at: String,
    pub updated_at: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse {
            id: employee.id.0,
            employee_id: employee.employee_id,
            name: employee.name,
            department: employee.department,
            role: employee.role,
            skills: employee.skills,
            skill_level: employee.skill_level,
            experience: employee.experience,
            category: employee.category,
            availability: employee.availability,
            performance_rating: employee.performance_rating,
            status: employee.status,
            created_at: employee.created_at.to_rfc3339(),
            updated_at: employee.updated_at.to_rfc3339(),
        }
    }
}

/// POST /employees
///
/// Create a new employee. Returns 201 with the persisted record.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    let employee = state.employee_service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// GET /employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state.employee_service.get(EmployeeId(id)).await?;
    Ok(Json(employee.into()))
}

/// GET /employees/employee-id/:employee_id
pub async fn get_employee_by_employee_id(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state
        .employee_service
        .get_by_employee_id(&employee_id)
        .await?;
    Ok(Json(employee.into()))
}

/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = state.employee_service.list().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// PUT /employees/:id
///
/// Partial update: fields present in the body overwrite stored values,
/// absent fields are left unchanged.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let employee = state
        .employee_service
        .update(EmployeeId(id), request.into())
        .await?;
    Ok(Json(employee.into()))
}

/// DELETE /employees/:id
///
/// Hard delete. Returns 204 with an empty body.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.employee_service.delete(EmployeeId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
