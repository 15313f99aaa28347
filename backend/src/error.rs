//! Error types for the catalog intake server.
//!
//! - [`BatchError`] - Problems with a submitted product batch
//! - [`ServerError`] - HTTP layer errors, rendered as JSON responses
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Record Errors
// =============================================================================

/// Validation messages for one record of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordErrors {
    /// Position of the record in the submitted array
    pub record_index: usize,
    pub errors: Vec<String>,
}

// =============================================================================
// Batch Errors
// =============================================================================

/// Errors while reading or checking a product batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Failed to read a batch file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Body is not valid JSON or does not match the product shape.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Body is valid JSON but not an array.
    #[error("Expected a JSON array of products")]
    NotAnArray,

    /// Array holds no product.
    #[error("Batch contains no products")]
    EmptyBatch,

    /// At least one record failed validation; nothing is accepted.
    #[error("{} record(s) failed validation", .0.len())]
    InvalidRecords(Vec<RecordErrors>),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Batch error.
    #[error("{0}")]
    Batch(#[from] BatchError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Batch(BatchError::InvalidRecords(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Batch(BatchError::IoError(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Batch(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let record_errors: &[RecordErrors] = match &self {
            ServerError::Batch(BatchError::InvalidRecords(errors)) => errors,
            _ => &[],
        };

        if status.is_server_error() {
            tracing::error!("❌ {}", self);
        } else {
            tracing::warn!("Rejected batch: {}", self);
        }

        let body = error_response(&self.to_string(), record_errors);
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let server_err: ServerError = BatchError::EmptyBatch.into();
        assert_eq!(server_err.status(), StatusCode::BAD_REQUEST);
        assert!(server_err.to_string().contains("no products"));
    }

    #[test]
    fn test_invalid_records_map_to_unprocessable() {
        let err: ServerError = BatchError::InvalidRecords(vec![RecordErrors {
            record_index: 2,
            errors: vec!["price.off: must be at most 100".into()],
        }])
        .into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "1 record(s) failed validation");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_io_failure_is_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: ServerError = BatchError::from(io).into();
        assert!(err.status().is_server_error());
    }
}
