//! Error types for attribute marshaling.
//!
//! Every failure in this crate is a deterministic validation failure raised
//! at the point of conversion. The variants separate client input errors
//! (a request carried a token we do not recognize) from client usage errors
//! (a caller handed the codec a value it cannot represent), so the transport
//! layer can turn them into the right protocol fault.

/// Main error type for attribute, selector and wire token handling.
#[derive(Debug, thiserror::Error)]
pub enum AttrError {
    /// Malformed client input, such as an unknown selector or boolean token
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Attribute value of a type the pair list cannot carry
    #[error("invalid attr type: {attribute} {actual}")]
    InvalidAttrType { attribute: String, actual: String },

    /// Flat key/value argument list ended with a key and no value
    #[error("not enough arguments: missing value for '{key}'")]
    NotEnoughArguments { key: String },

    /// Codec configuration rejected by validation
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AttrError {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an invalid attribute type error
    pub fn invalid_attr_type(attribute: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidAttrType {
            attribute: attribute.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Whether the caller can fix this error by correcting its input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. }
                | Self::InvalidAttrType { .. }
                | Self::NotEnoughArguments { .. }
        )
    }
}

pub type AttrResult<T> = Result<T, AttrError>;
