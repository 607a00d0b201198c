use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::export::ExportError;

/// Errors a handler can return. The estimator itself never fails; these all
/// come from boundary validation or from rendering exports.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

/// Error response that gets serialized to JSON
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::ExportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::ValidationError(_) => "ValidationError",
            ApiError::ExportError(_) => "ExportError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.error_type();

        let message = match &self {
            ApiError::ExportError(_) => {
                tracing::error!(error = %self, "API error occurred");
                "An internal error occurred".to_string()
            }
            _ => {
                tracing::debug!(error = %self, "Client error");
                self.to_string()
            }
        };

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(error: ExportError) -> Self {
        ApiError::ExportError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HouseholdProfile;
    use validator::Validate;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::ValidationError("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ExportError("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ApiError::ValidationError("test".to_string()).error_type(),
            "ValidationError"
        );
        assert_eq!(
            ApiError::ExportError("test".to_string()).error_type(),
            "ExportError"
        );
    }

    #[test]
    fn test_validation_errors_convert() {
        let profile = HouseholdProfile {
            age: 12,
            ..Default::default()
        };
        let err: ApiError = profile.validate().unwrap_err().into();
        assert!(matches!(err, ApiError::ValidationError(ref msg) if msg.contains("age")));
    }
}
