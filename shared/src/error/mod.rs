//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code, message and details
//! - [`ApiResponse`]: JSON envelope used for every error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Parking zone errors
//! - 2xxx: AI inference errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::zone_not_found("zone-x");
//! assert_eq!(err.code, ErrorCode::ZoneNotFound);
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 1001);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
