//! Shared types for Simhastha Park Smart
//!
//! Types used by both the server and its clients: the parking zone model,
//! the request/response contracts of the AI flows, and the unified error
//! system with its JSON response envelope.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{BookingResult, OccupancyUpdateResult, ParkingZone};
