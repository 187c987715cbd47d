//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ZoneNotFound => StatusCode::NOT_FOUND,

            Self::ZoneFull => StatusCode::CONFLICT,

            // 503 Service Unavailable (client can retry later)
            Self::InferenceUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 502 Bad Gateway (upstream answered, but not in the agreed shape)
            Self::InferenceMalformedOutput => StatusCode::BAD_GATEWAY,

            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed => StatusCode::BAD_REQUEST,
        }
    }
}
