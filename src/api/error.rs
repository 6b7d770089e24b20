//! API error handling.
//!
//! Three failure shapes reach the client:
//!
//! - not found: `404` with an empty body
//! - validation: `400` with the field → messages mapping as the whole body
//! - store failure: `500` with a generic [`ApiError`]; details are logged,
//!   never returned

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::validation::ValidationErrors;
use crate::infrastructure::RepositoryError;

// =============================================================================
// API Error
// =============================================================================

/// Generic error body for failures that are not the caller's fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// API Error Response
// =============================================================================

/// Body of an error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    Empty,
    Validation(ValidationErrors),
    Error(ApiError),
}

/// API error response containing status code and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiErrorResponse {
    #[must_use]
    pub const fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self { status, body }
    }

    /// Creates a 404 Not Found response with no body.
    #[must_use]
    pub const fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorBody::Empty)
    }

    /// Creates a 400 Bad Request response carrying the field errors.
    #[must_use]
    pub const fn validation(errors: ValidationErrors) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorBody::Validation(errors))
    }

    /// Creates a 500 Internal Server Error response.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::Error(ApiError::new("INTERNAL_ERROR", message)),
        )
    }

    /// Field errors, if this is a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match &self.body {
            ErrorBody::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        match self.body {
            ErrorBody::Empty => self.status.into_response(),
            ErrorBody::Validation(errors) => (self.status, Json(errors)).into_response(),
            ErrorBody::Error(error) => (self.status, Json(error)).into_response(),
        }
    }
}

impl From<RepositoryError> for ApiErrorResponse {
    fn from(error: RepositoryError) -> Self {
        tracing::error!(%error, "Repository operation failed");
        Self::internal_error("An internal error occurred")
    }
}

impl From<ValidationErrors> for ApiErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation(errors)
    }
}

// =============================================================================
// Tests
// =============================================================================
