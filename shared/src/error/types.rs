//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type crossing the HTTP boundary:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level validation errors, ids)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a zone not found error carrying the requested id
    pub fn zone_not_found(zone_id: impl Into<String>) -> Self {
        Self::new(ErrorCode::ZoneNotFound).with_detail("zone_id", zone_id.into())
    }

    /// Create the unified "AI service unavailable" error
    pub fn inference_unavailable() -> Self {
        Self::new(ErrorCode::InferenceUnavailable)
    }

    /// Create a malformed AI output error
    pub fn malformed_output(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InferenceMalformedOutput, msg)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut err = Self::validation("Validation failed");
        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            err = err.with_detail(field.to_string(), messages);
        }
        err
    }
}

/// Error envelope returned with every failed request
///
/// - `code`: numeric [`ErrorCode`]
/// - `message`: human-readable message
/// - `details`: structured extras (field errors, zone id, attempts)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // System errors are logged here, everything else is the caller's concern
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::ZoneFull);
        assert_eq!(err.code, ErrorCode::ZoneFull);
        assert_eq!(err.message, "Sorry, no available spaces left in this zone.");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "mobileNumber")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "mobileNumber");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_zone_not_found_carries_id() {
        let err = AppError::zone_not_found("zone-x");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Parking zone not found.");
        assert_eq!(err.details.unwrap().get("zone_id").unwrap(), "zone-x");
    }

    #[test]
    fn test_inference_unavailable_is_503() {
        let err = AppError::inference_unavailable();
        assert_eq!(err.http_status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "query is required"))]
        query: String,
    }

    #[test]
    fn test_from_validation_errors() {
        let probe = Probe {
            query: String::new(),
        };
        let err: AppError = probe.validate().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(
            details.get("query").unwrap(),
            &serde_json::json!(["query is required"])
        );
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::zone_not_found("zone-z");
        let response = ApiResponse::error(&err);

        assert_eq!(response.code, 1001);
        assert_eq!(response.message, "Parking zone not found.");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize_skips_empty_details() {
        let response = ApiResponse::error(&AppError::inference_unavailable());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], 2001);
        assert!(json.get("details").is_none());
    }
}
