//! Vehicle counting contract

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::data_uri::validate_data_uri;
use super::zone::ParkingZone;

/// Camera frame of a parking area
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CountVehiclesInput {
    #[validate(custom(function = "validate_data_uri"))]
    pub photo_data_uri: String,
}

/// Vehicle count from the model
///
/// Unsigned: a negative or fractional count fails deserialization and is
/// treated as malformed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CountVehiclesOutput {
    pub vehicle_count: u32,
}

/// Response of the count-and-update endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCountResult {
    pub vehicle_count: u32,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ParkingZone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_count_is_rejected() {
        let result: Result<CountVehiclesOutput, _> =
            serde_json::from_str(r#"{"vehicleCount":-1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let result: Result<CountVehiclesOutput, _> =
            serde_json::from_str(r#"{"vehicleCount":2.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_requires_data_uri() {
        let input = CountVehiclesInput {
            photo_data_uri: "https://example.com/frame.jpg".into(),
        };
        assert!(input.validate().is_err());
    }
}
