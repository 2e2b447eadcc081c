#[derive(thiserror::Error, Debug)]
pub enum CivicError {
    #[error("{0}")]
    BackendError(String),
    #[error("Transport error: {0:?}")]
    TransportError(anyhow::Error),
    #[error("Unexpected HTTP status {status}: {body}")]
    StatusError { status: u16, body: String },
    #[error("Deserialization error: {0:?} {1:?}")]
    DeserializationError(anyhow::Error, Option<DeserializationErrorContext>),
    #[error("Configuration error: {0:?}")]
    ConfigurationError(anyhow::Error),
    #[error("Wallet error: {0:?}")]
    WalletError(anyhow::Error),
}

impl CivicError {

    /// Human-readable message carried by the error.
    ///
    /// For backend rejections this is exactly the `message` field of the envelope.
    pub fn message(&self) -> String {
        match self {
            Self::BackendError(message) => message.clone(),
            Self::TransportError(e)
            | Self::ConfigurationError(e)
            | Self::WalletError(e)
            | Self::DeserializationError(e, _) => e.to_string(),
            Self::StatusError { status, .. } => format!("Request failed with status {status}"),
        }
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, Self::BackendError(_))
    }

    pub(crate) fn new_deserialization_error_with_value(err: anyhow::Error, value: String) -> Self {
        Self::DeserializationError(err, Some(DeserializationErrorContext {
            field: None,
            value: Some(value)
        }))
    }

    pub(crate) fn new_deserialization_error_with_field_and_value(
        err: anyhow::Error,
        field: String,
        value: String
    ) -> Self {
        Self::DeserializationError(err, Some(DeserializationErrorContext {
            field: Some(field),
            value: Some(value)
        }))
    }

}

#[derive(Debug)]
pub struct DeserializationErrorContext {
    pub field: Option<String>,
    pub value: Option<String>
}
