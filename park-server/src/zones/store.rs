//! ZoneStore - in-memory parking zone registry
//!
//! The only legal way to read or mutate zones. Reads hand out clones so
//! callers can never bypass the invariant `available_spaces <= total_spaces`;
//! mutations take the write lock for the whole read-modify-write so
//! concurrent bookings cannot lose updates.

use parking_lot::RwLock;
use shared::error::{AppError, ErrorCode};
use shared::models::{BookingResult, OccupancyUpdateResult, ParkingZone};
use std::sync::Arc;
use thiserror::Error;

use super::seed::seed_zones;

/// Zone operation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("Parking zone not found.")]
    NotFound(String),

    #[error("Sorry, no available spaces left in this zone.")]
    Exhausted(String),
}

impl ZoneError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ZoneError::NotFound(_) => ErrorCode::ZoneNotFound,
            ZoneError::Exhausted(_) => ErrorCode::ZoneFull,
        }
    }

    pub fn zone_id(&self) -> &str {
        match self {
            ZoneError::NotFound(id) | ZoneError::Exhausted(id) => id,
        }
    }
}

impl From<ZoneError> for AppError {
    fn from(err: ZoneError) -> Self {
        AppError::with_message(err.code(), err.to_string()).with_detail("zone_id", err.zone_id())
    }
}

/// In-memory zone store shared by all request handlers
#[derive(Debug, Clone)]
pub struct ZoneStore {
    zones: Arc<RwLock<Vec<ParkingZone>>>,
}

impl ZoneStore {
    /// Build a store from an initial zone list (insertion order is kept)
    ///
    /// Seeds that violate the capacity invariant are clamped.
    pub fn new(zones: Vec<ParkingZone>) -> Self {
        let zones = zones
            .into_iter()
            .map(|mut zone| {
                if zone.available_spaces > zone.total_spaces {
                    tracing::warn!(
                        zone_id = %zone.id,
                        available = zone.available_spaces,
                        total = zone.total_spaces,
                        "Seed zone exceeds capacity, clamping"
                    );
                    zone.available_spaces = zone.total_spaces;
                }
                zone
            })
            .collect();

        Self {
            zones: Arc::new(RwLock::new(zones)),
        }
    }

    /// Store populated with the fixed seed list
    pub fn seeded() -> Self {
        Self::new(seed_zones())
    }

    pub fn len(&self) -> usize {
        self.zones.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.read().is_empty()
    }

    /// All zones, in insertion order
    pub fn list_zones(&self) -> Vec<ParkingZone> {
        self.zones.read().clone()
    }

    pub fn get_zone(&self, id: &str) -> Option<ParkingZone> {
        self.zones.read().iter().find(|z| z.id == id).cloned()
    }

    /// Reserve one spot, returning the updated zone
    pub fn try_book(&self, id: &str) -> Result<ParkingZone, ZoneError> {
        let mut zones = self.zones.write();
        let zone = zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| ZoneError::NotFound(id.to_string()))?;

        if zone.available_spaces == 0 {
            return Err(ZoneError::Exhausted(id.to_string()));
        }

        zone.available_spaces -= 1;
        tracing::info!(
            zone_id = %zone.id,
            available = zone.available_spaces,
            "Spot booked"
        );
        Ok(zone.clone())
    }

    /// Reserve one spot, reporting the outcome as a value
    pub fn book_spot(&self, id: &str) -> BookingResult {
        booking_result(self.try_book(id))
    }

    /// Set availability from an occupied-space reading
    ///
    /// `total - occupied` is clamped into `0..=total`, so negative or
    /// over-capacity readings never break the invariant.
    pub fn try_set_occupancy(&self, id: &str, occupied: i64) -> Result<ParkingZone, ZoneError> {
        let mut zones = self.zones.write();
        let zone = zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| ZoneError::NotFound(id.to_string()))?;

        let total = i64::from(zone.total_spaces);
        let available = total.saturating_sub(occupied).clamp(0, total);
        // clamped into 0..=total_spaces, always fits
        zone.available_spaces = available as u32;

        tracing::info!(
            zone_id = %zone.id,
            occupied,
            available = zone.available_spaces,
            "Occupancy updated"
        );
        Ok(zone.clone())
    }

    pub fn set_occupancy(&self, id: &str, occupied: i64) -> OccupancyUpdateResult {
        OccupancyUpdateResult {
            success: self.try_set_occupancy(id, occupied).is_ok(),
        }
    }
}

/// Turn a booking outcome into the client-facing result
pub fn booking_result(outcome: Result<ParkingZone, ZoneError>) -> BookingResult {
    match outcome {
        Ok(zone) => BookingResult {
            success: true,
            message: format!("Booking confirmed for {}. One spot reserved.", zone.name),
            zone: Some(zone),
        },
        Err(e) => BookingResult {
            success: false,
            message: e.to_string(),
            zone: None,
        },
    }
}

impl Default for ZoneStore {
    fn default() -> Self {
        Self::seeded()
    }
}
