//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// One rejected request field with the reason for its rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,
    /// Why the field was rejected.
    pub reason: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid enquiry payload: 2 invalid field(s)",
///     "details": [{"field": "phone", "reason": "missing required field"}]
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ServiceError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Per-field detail, present on validation errors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category      | HTTP Status                |
/// |-----------|---------------|----------------------------|
/// | 1000–1999 | Validation    | 422 Unprocessable Entity   |
/// | 3000–3999 | Server/Config | 500 Internal Server Error  |
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request body failed shape validation; the store was never touched.
    #[error("invalid enquiry payload: {} invalid field(s)", fields.len())]
    Validation {
        /// Every missing or mistyped field, in wire order.
        fields: Vec<FieldError>,
    },

    /// Persistence layer failure (insert, commit, or connection loss).
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Invalid or unusable configuration. Raised at startup; a request
    /// never produces this variant.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Builds a [`ServiceError::Validation`] from collected field errors.
    #[must_use]
    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self::Validation { fields }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation { .. } => 1001,
            Self::Persistence(_) => 3001,
            Self::Config(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Persistence(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();
        let details = match self {
            Self::Validation { fields } => Some(fields),
            Self::Persistence(_) | Self::Config(_) => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
