//! Inline media carried as `data:<mimetype>;base64,<encoded_data>` URIs

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use validator::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUriError {
    #[error("data URI must start with 'data:'")]
    MissingScheme,
    #[error("data URI must declare a MIME type")]
    MissingMimeType,
    #[error("data URI must use base64 encoding")]
    NotBase64,
    #[error("data URI payload is empty")]
    EmptyPayload,
    #[error("data URI payload is not valid base64")]
    InvalidPayload,
}

/// A parsed data URI
///
/// `data` stays base64 encoded; it is forwarded to the inference provider as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: String,
}

impl DataUri {
    pub fn parse(uri: &str) -> Result<Self, DataUriError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUriError::NotBase64)?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or(DataUriError::NotBase64)?;

        if mime_type.is_empty() || !mime_type.contains('/') {
            return Err(DataUriError::MissingMimeType);
        }
        if payload.is_empty() {
            return Err(DataUriError::EmptyPayload);
        }
        STANDARD
            .decode(payload)
            .map_err(|_| DataUriError::InvalidPayload)?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        })
    }
}

/// `validator` hook for request fields holding a data URI
pub fn validate_data_uri(value: &str) -> Result<(), ValidationError> {
    DataUri::parse(value).map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("data_uri");
        err.message = Some(e.to_string().into());
        err
    })
}
