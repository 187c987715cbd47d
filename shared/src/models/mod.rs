//! Data models
//!
//! Shared between park-server and its clients (via API). All JSON field
//! names are camelCase.

pub mod assistant;
pub mod data_uri;
pub mod vehicle_count;
pub mod verification;
pub mod zone;

// Re-exports
pub use assistant::*;
pub use data_uri::*;
pub use vehicle_count::*;
pub use verification::*;
pub use zone::*;
