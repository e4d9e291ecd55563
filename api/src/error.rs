//! Unified error types for the courses API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors raised by services and repositories
//! - `CourseClientError`: Errors from the sibling course-service client
//! - `ConfigError`: Startup configuration errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Sibling course-service client errors
#[derive(Debug, Error)]
pub enum CourseClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Course service unavailable: {0}")]
    Unavailable(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CourseClientError {
    /// True when the sibling could not be reached at all (as opposed to
    /// answering with an error status).
    pub fn is_unreachable(&self) -> bool {
        match self {
            CourseClientError::Request(e) => e.is_connect() || e.is_timeout(),
            CourseClientError::Unavailable(_) => true,
            CourseClientError::Api { .. } | CourseClientError::Deserialization(_) => false,
        }
    }
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidEnvVar { key: String, value: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Course service error: {0}")]
    CourseClient(#[from] CourseClientError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

fn json_error(status: StatusCode, error: &str, details: Option<String>) -> Response {
    let body = Json(ErrorResponse {
        error: error.to_string(),
        details,
    });
    (status, body).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                tracing::debug!("Not found: {}", msg);
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Domain(DomainError::InvalidArgument(msg)) => {
                json_error(StatusCode::BAD_REQUEST, "Invalid argument", Some(msg))
            }
            AppError::Domain(DomainError::Conflict(msg)) => {
                json_error(StatusCode::CONFLICT, "Conflict", Some(msg))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(format!("An unexpected error occurred: {}", msg)),
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(format!("An unexpected error occurred: {}", msg)),
                )
            }
            AppError::BadRequest(msg) => json_error(StatusCode::BAD_REQUEST, "Bad request", Some(msg)),
            AppError::CourseClient(e) => {
                tracing::warn!("Course service error: {}", e);
                if e.is_unreachable() {
                    return StatusCode::SERVICE_UNAVAILABLE.into_response();
                }
                match e {
                    CourseClientError::Api { status, .. } => StatusCode::from_u16(status)
                        .unwrap_or(StatusCode::BAD_GATEWAY)
                        .into_response(),
                    other => json_error(
                        StatusCode::BAD_GATEWAY,
                        "Course service error",
                        Some(other.to_string()),
                    ),
                }
            }
        }
    }
}
