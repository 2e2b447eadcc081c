pub mod types;

use crate::errors::CivicError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The uniform wrapper the backend puts around every response body.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(bound(deserialize = "S: Deserialize<'de> + Default"))]
pub struct ApiResponse<S> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: S,
}

impl ApiResponse<serde_json::Value> {

    pub fn ok(data: serde_json::Value) -> Self {
        ApiResponse { success: true, message: String::new(), data }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        ApiResponse { success: false, message: message.into(), data: serde_json::Value::Null }
    }
}

/// Whatever the transport produced for one request.
#[derive(Debug)]
pub enum RawOutcome {
    Envelope(ApiResponse<serde_json::Value>),
    Failed(CivicError),
}

impl From<Result<ApiResponse<serde_json::Value>, CivicError>> for RawOutcome {
    fn from(res: Result<ApiResponse<serde_json::Value>, CivicError>) -> Self {
        match res {
            Ok(envelope) => RawOutcome::Envelope(envelope),
            Err(e) => RawOutcome::Failed(e),
        }
    }
}

/// Maps a raw outcome onto the service result.
///
/// Transport failures pass through untouched, rejected envelopes become
/// [`CivicError::BackendError`] carrying the backend message, and accepted
/// envelopes yield their `data` decoded as `T`.
pub fn normalize<T: DeserializeOwned>(outcome: RawOutcome) -> Result<T, CivicError> {
    match outcome {
        RawOutcome::Failed(err) => Err(err),
        RawOutcome::Envelope(res) if !res.success => Err(CivicError::BackendError(res.message)),
        RawOutcome::Envelope(res) => T::deserialize(&res.data)
            .map_err(|e| {
                log::error!("Failed to decode response data due to deserialization error.");
                CivicError::new_deserialization_error_with_field_and_value(
                    e.into(),
                    "data".to_owned(),
                    res.data.to_string()
                )
            }),
    }
}
