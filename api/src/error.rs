//! Unified error types for the HRM API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{FieldViolation, ValidationErrors};

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Employee ID already exists: {0}")]
    DuplicateEmployeeId(String),

    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<Vec<FieldViolation>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, violations) = match self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg), None)
            }
            AppError::Domain(DomainError::DuplicateEmployeeId(id)) => (
                StatusCode::CONFLICT,
                "Employee ID already exists",
                Some(id),
                None,
            ),
            AppError::Domain(DomainError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                None,
                Some(errors.0),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", Some(msg), None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg), None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            violations,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response =
            AppError::Domain(DomainError::NotFound("Employee 9 not found".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_employee_id_maps_to_409() {
        let response =
            AppError::Domain(DomainError::DuplicateEmployeeId("E1".into())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_violations() {
        let errors = ValidationErrors(vec![FieldViolation {
            field: "name",
            message: "Name is required".into(),
        }]);
        let response = AppError::Domain(DomainError::Validation(errors)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["violations"][0]["field"], "name");
    }

    #[tokio::test]
    async fn database_maps_to_500_without_details() {
        let response =
            AppError::Domain(DomainError::Database("connection reset".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body.get("details").is_none());
    }
}
