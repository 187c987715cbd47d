//! Inference error types
//!
//! [`InferenceError`] is what a single provider call can fail with.
//! [`FlowError`] is what a flow surfaces after the retry policy gave up.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Failure of one provider call
#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    #[error("inference provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("inference transport error: {0}")]
    Transport(String),

    #[error("inference response malformed: {0}")]
    MalformedResponse(String),

    #[error("inference provider not configured: {0}")]
    NotConfigured(String),
}

impl InferenceError {
    /// HTTP status reported by the provider, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            InferenceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The transient "service unavailable" signal: an explicit 503 status,
    /// or a message that mentions 503
    pub fn is_service_unavailable(&self) -> bool {
        self.status() == Some(503) || self.to_string().contains("503")
    }
}

/// Terminal flow failure
#[derive(Debug, Error)]
pub enum FlowError {
    /// Non-retryable failure or exhausted attempt budget. One message for both.
    #[error("The AI verification service is currently unavailable. Please try again later.")]
    Unavailable {
        attempts: u32,
        #[source]
        source: InferenceError,
    },

    #[error("The AI service returned an unexpected response: {0}")]
    MalformedOutput(String),

    #[error("Invalid flow input")]
    InvalidInput(#[from] validator::ValidationErrors),

    #[error("Prompt rendering failed: {0}")]
    Prompt(String),
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Unavailable { attempts, .. } => {
                AppError::inference_unavailable().with_detail("attempts", attempts)
            }
            FlowError::MalformedOutput(msg) => AppError::malformed_output(msg),
            FlowError::InvalidInput(errors) => errors.into(),
            FlowError::Prompt(msg) => AppError::with_message(ErrorCode::InternalError, msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_503_is_transient() {
        let err = InferenceError::Status {
            status: 503,
            message: "overloaded".into(),
        };
        assert!(err.is_service_unavailable());
    }

    #[test]
    fn test_message_mentioning_503_is_transient() {
        let err = InferenceError::Transport("upstream said 503 Service Unavailable".into());
        assert!(err.is_service_unavailable());
    }

    #[test]
    fn test_other_errors_are_not_transient() {
        let err = InferenceError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert!(!err.is_service_unavailable());
        assert!(!InferenceError::NotConfigured("no key".into()).is_service_unavailable());
    }

    #[test]
    fn test_unavailable_maps_to_unified_app_error() {
        let err = FlowError::Unavailable {
            attempts: 3,
            source: InferenceError::Transport("reset".into()),
        };
        assert_eq!(
            err.to_string(),
            "The AI verification service is currently unavailable. Please try again later."
        );
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::InferenceUnavailable);
        assert_eq!(app.details.unwrap().get("attempts").unwrap(), 3);
    }
}
