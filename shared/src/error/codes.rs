//! Unified error codes for Simhastha Park Smart
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Parking zone errors
//! - 2xxx: AI inference errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that clients can branch
/// on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 1xxx: Zone ====================
    /// Parking zone not found
    ZoneNotFound = 1001,
    /// Parking zone has no available spaces
    ZoneFull = 1002,

    // ==================== 2xxx: Inference ====================
    /// AI service unavailable (terminal, after retries)
    InferenceUnavailable = 2001,
    /// AI service returned output that does not match the expected shape
    InferenceMalformedOutput = 2002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",

            // Zone
            ErrorCode::ZoneNotFound => "Parking zone not found.",
            ErrorCode::ZoneFull => "Sorry, no available spaces left in this zone.",

            // Inference
            ErrorCode::InferenceUnavailable => {
                "The AI verification service is currently unavailable. Please try again later."
            }
            ErrorCode::InferenceMalformedOutput => "The AI service returned an unexpected response",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),

            // Zone
            1001 => Ok(ErrorCode::ZoneNotFound),
            1002 => Ok(ErrorCode::ZoneFull),

            // Inference
            2001 => Ok(ErrorCode::InferenceUnavailable),
            2002 => Ok(ErrorCode::InferenceMalformedOutput),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
