//! Parking Zone Model

use serde::{Deserialize, Serialize};

/// Parking zone entity (one physical parking area)
///
/// `available_spaces` is the only field that changes at runtime and always
/// stays within `0..=total_spaces`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingZone {
    pub id: String,
    pub name: String,
    pub location: String,
    pub total_spaces: u32,
    pub available_spaces: u32,
    pub rules: String,
}

impl ParkingZone {
    /// Whether at least one space can still be booked
    pub fn is_available(&self) -> bool {
        self.available_spaces > 0
    }

    /// Spaces currently taken
    ///
    /// Zones received over the wire are not guaranteed to respect the
    /// capacity invariant; an inconsistent zone reports 0.
    pub fn occupied_spaces(&self) -> u32 {
        self.total_spaces.saturating_sub(self.available_spaces)
    }
}

/// Booking outcome
///
/// Failures are values, not errors: `success` is false and `message`
/// explains why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ParkingZone>,
}

/// Occupancy update payload
///
/// Signed so that out-of-range sensor readings reach the store and get
/// clamped there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyUpdate {
    pub occupied_spaces: i64,
}

/// Occupancy update outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyUpdateResult {
    pub success: bool,
}
