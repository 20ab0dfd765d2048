//! Transport settings (`rawSettings`, `xhttpSettings`)
//!
//! Only `raw` and `xhttp` carry a settings object. The other network tokens
//! are accepted and serialized as `network` alone.
//!
//! ## XHTTP `extra`
//!
//! The `extra` parameter holds a JSON document, percent-encoded once more on
//! top of query encoding. It is decoded (`+` as space, then percent-decoding)
//! and parsed into [`XhttpExtra`]. A payload that fails either step is
//! dropped with a warning; the link itself still parses.
//! `downloadSettings` is accepted in the payload but never written back out.

use crate::constants::key;
use crate::enums::{Network, XhttpMode};
use crate::error::{ParseError, Result};
use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// `rawSettings` object
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawSettings {
    /// Header obfuscation; links never set it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<RawHeader>,
}

/// Raw transport header obfuscation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawHeader {
    /// `{"type": "none"}`
    None,
    /// `{"type": "http", ...}`
    Http(HttpHeader),
}

/// HTTP header obfuscation for the raw transport
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpHeader {
    /// Fake request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<HttpRequest>,
    /// Fake response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<HttpResponse>,
}

/// Fake HTTP request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// HTTP method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Candidate paths, one picked per request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    /// Header name to candidate values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Vec<String>>>,
}

/// Fake HTTP response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Reason phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Header name to candidate values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Vec<String>>>,
}

/// Integer or `"from-to"` range, as accepted by the core
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RangeValue {
    /// Single value
    Int(i64),
    /// Range text such as `"100-1000"`
    Text(String),
}

/// `xhttpSettings` object
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct XhttpSettings {
    /// Host header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Request path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Upload mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<XhttpMode>,
    /// Advanced tuning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<XhttpExtra>,
}

/// Advanced XHTTP tuning carried in the `extra` parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct XhttpExtra {
    /// Extra request headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Padding length range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_padding_bytes: Option<RangeValue>,
    /// Drop the gRPC content-type header
    #[serde(rename = "noGRPCHeader", skip_serializing_if = "Option::is_none")]
    pub no_grpc_header: Option<bool>,
    /// Maximum bytes per upload POST
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sc_max_each_post_bytes: Option<RangeValue>,
    /// Minimum interval between upload POSTs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sc_min_posts_interval_ms: Option<RangeValue>,
    /// Connection reuse tuning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xmux: Option<XhttpMux>,
    /// Separate download leg; read but never serialized
    #[serde(default, skip_serializing)]
    pub download_settings: Option<serde_json::Value>,
}

/// `xmux` connection reuse tuning
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct XhttpMux {
    /// Streams per connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<RangeValue>,
    /// Open connections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<RangeValue>,
    /// Times a connection is reused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_max_reuse_times: Option<RangeValue>,
    /// Requests per connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_max_request_times: Option<RangeValue>,
    /// Seconds a connection stays reusable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_max_reusable_secs: Option<RangeValue>,
    /// Keep-alive period in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_keep_alive_period: Option<i64>,
}

impl XhttpExtra {
    /// Decode an `extra` query value
    ///
    /// # Errors
    ///
    /// `MalformedExtraPayload` when percent-decoding or JSON parsing fails.
    pub fn decode(raw: &str) -> Result<Self> {
        let unplussed = raw.replace('+', " ");
        let json = urlencoding::decode(&unplussed)
            .map_err(|e| ParseError::MalformedExtraPayload(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| ParseError::MalformedExtraPayload(e.to_string()))
    }
}

impl XhttpSettings {
    /// Build from link parameters
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` for an unknown `mode`. A bad `extra` is not an error.
    pub fn from_query(query: &QueryParams) -> Result<Self> {
        let extra = query
            .get(key::EXTRA)
            .and_then(|raw| match XhttpExtra::decode(raw) {
                Ok(extra) => Some(extra),
                Err(err) => {
                    warn!(error = %err, "discarding invalid xhttp extra payload");
                    None
                }
            });

        Ok(XhttpSettings {
            host: query.get(key::HOST).map(str::to_string),
            path: query.get(key::PATH).map(str::to_string),
            mode: query.get_enum(key::MODE)?,
            extra,
        })
    }
}

/// Network together with its settings object
#[derive(Debug, Clone, PartialEq)]
pub enum TransportConfig {
    /// `network: "raw"` with `rawSettings`
    Raw(RawSettings),
    /// `network: "xhttp"` with `xhttpSettings`
    Xhttp(XhttpSettings),
    /// A network without a settings object (kcp, grpc, ws, httpupgrade)
    Other(Network),
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig::Raw(RawSettings::default())
    }
}

impl TransportConfig {
    /// Resolve `type`/`network`, falling back to `default_network`, and build
    /// the matching settings
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` for an unknown network or XHTTP mode.
    pub fn from_query(query: &QueryParams, default_network: Network) -> Result<Self> {
        let network = query.get_enum(key::NETWORK)?.unwrap_or(default_network);
        Ok(match network {
            Network::Raw => TransportConfig::Raw(RawSettings::default()),
            Network::Xhttp => TransportConfig::Xhttp(XhttpSettings::from_query(query)?),
            other => TransportConfig::Other(other),
        })
    }

    /// The `network` token this configuration serializes as
    pub fn network(&self) -> Network {
        match self {
            TransportConfig::Raw(_) => Network::Raw,
            TransportConfig::Xhttp(_) => Network::Xhttp,
            TransportConfig::Other(network) => *network,
        }
    }
}
