//! Error types for link parsing and outbound serialization
//!
//! The crate uses one error convention (see crate-level docs):
//! - **MalformedUrl**: The link is not a structurally valid URI (no `://`, missing host or port).
//! - **NotVlessUrl**: The VLESS parser was handed a link with another scheme.
//! - **UnsupportedScheme**: No parser is registered for the scheme.
//! - **InvalidEnumValue**: A parameter holds a token outside its closed value set.
//! - **MalformedExtraPayload**: The XHTTP `extra` payload could not be decoded. Recovered inside
//!   the XHTTP builder; callers of the public parse functions never see it.
//! - **MalformedSubscription** / **Serialize**: Subscription body or JSON rendering failures.

use thiserror::Error;

/// Result type for link parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while turning a link into an outbound object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Link is not a valid URI or misses a mandatory component
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),
    /// VLESS parser received a non-`vless` scheme
    #[error("Not a VLESS URL: scheme `{0}`")]
    NotVlessUrl(String),
    /// No parser registered for the scheme
    #[error("Unsupported protocol: {0}")]
    UnsupportedScheme(String),
    /// Token outside the closed value set of an enum
    #[error("Invalid {enum_name} value: `{value}`")]
    InvalidEnumValue {
        /// Name of the enum the token was checked against
        enum_name: &'static str,
        /// The rejected token
        value: String,
    },
    /// XHTTP `extra` payload is not percent-encoded JSON of the expected shape
    #[error("Malformed xhttp extra payload: {0}")]
    MalformedExtraPayload(String),
    /// Subscription body could not be decoded
    #[error("Malformed subscription: {0}")]
    MalformedSubscription(String),
    /// Outbound object could not be rendered as JSON
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl ParseError {
    pub(crate) fn invalid_enum(enum_name: &'static str, value: impl Into<String>) -> Self {
        ParseError::InvalidEnumValue {
            enum_name,
            value: value.into(),
        }
    }
}

impl From<url::ParseError> for ParseError {
    fn from(err: url::ParseError) -> Self {
        ParseError::MalformedUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Serialize(err.to_string())
    }
}

impl From<base64::DecodeError> for ParseError {
    fn from(err: base64::DecodeError) -> Self {
        ParseError::MalformedSubscription(err.to_string())
    }
}
