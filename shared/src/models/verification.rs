//! Identity verification contract

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::data_uri::validate_data_uri;

/// Identity + vehicle details submitted before booking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIdentityInput {
    /// Vehicle registration number (e.g. MH-12-AB-1234)
    #[validate(length(min = 1, max = 32, message = "Vehicle number is required."))]
    pub vehicle_number: String,
    #[validate(length(equal = 10, message = "Mobile number must be 10 digits."))]
    pub mobile_number: String,
    /// Photo of the user's face as a base64 data URI
    #[validate(custom(function = "validate_data_uri"))]
    pub user_photo_data_uri: String,
}

/// Verification verdict from the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIdentityOutput {
    pub is_verified: bool,
    /// Failure reason, or a success message
    #[validate(length(min = 1))]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(vehicle: &str, mobile: &str) -> VerifyIdentityInput {
        VerifyIdentityInput {
            vehicle_number: vehicle.into(),
            mobile_number: mobile.into(),
            user_photo_data_uri: "data:image/jpeg;base64,aGVsbG8=".into(),
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(input("MH-12-AB-1234", "9876543210").validate().is_ok());
    }

    #[test]
    fn test_mobile_must_be_ten_chars() {
        let errors = input("MH-12-AB-1234", "12345").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mobile_number"));
    }

    #[test]
    fn test_vehicle_required() {
        let errors = input("", "9876543210").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("vehicle_number"));
    }

    #[test]
    fn test_output_reads_camel_case() {
        let out: VerifyIdentityOutput =
            serde_json::from_str(r#"{"isVerified":true,"reason":"All checks passed"}"#).unwrap();
        assert!(out.is_verified);
        assert!(out.validate().is_ok());
    }
}
