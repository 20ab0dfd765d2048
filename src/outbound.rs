//! Outbound object graph and its canonical JSON form
//!
//! ```json
//! {
//!   "protocol": "vless",
//!   "settings": { "vnext": [ { "address": "...", "port": 443, "users": [ { "id": "...", "encryption": "none" } ] } ] },
//!   "tag": "...",
//!   "streamSettings": { "network": "raw", "security": "none", "rawSettings": {} },
//!   "mux": { "enabled": false, "xudpProxyUDP443": "skip" }
//! }
//! ```
//!
//! Absent values are omitted, never written as `null`.

use crate::constants::{TRUTHY, default, key};
use crate::enums::{Flow, Protocol, XudpProxyUdp443};
use crate::error::Result;
use crate::query::QueryParams;
use crate::stream::StreamSettings;
use serde::{Deserialize, Serialize};

/// One VLESS user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VlessUser {
    /// User UUID
    pub id: String,
    /// Always `none` for VLESS today
    pub encryption: String,
    /// Flow control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<Flow>,
    /// User level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
}

/// One `vnext` server entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VlessServer {
    /// Server address
    pub address: String,
    /// Server port
    pub port: u16,
    /// Users; a link yields exactly one
    pub users: Vec<VlessUser>,
}

/// VLESS outbound settings, wrapped as `{"vnext": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VnextSettings {
    /// Server list
    pub vnext: Vec<VlessServer>,
}

/// Protocol-specific `settings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OutboundSettings {
    /// VLESS servers
    Vless(VnextSettings),
}

/// `mux` object
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MuxSettings {
    /// Whether multiplexing is on
    pub enabled: bool,
    /// Maximum TCP streams per connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<i64>,
    /// Maximum XUDP streams per connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xudp_concurrency: Option<i64>,
    /// UDP/443 handling
    #[serde(rename = "xudpProxyUDP443", skip_serializing_if = "Option::is_none")]
    pub xudp_proxy_udp443: Option<XudpProxyUdp443>,
}

impl MuxSettings {
    /// Build from link parameters; a link without `mux` gets a disabled mux
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` for an unknown `xudp_proxyUDP443` policy.
    pub fn from_query(query: &QueryParams) -> Result<Self> {
        let enabled = query.get_or(key::MUX, default::MUX).to_lowercase();

        Ok(MuxSettings {
            enabled: TRUTHY.contains(&enabled.as_str()),
            concurrency: query.get_parsed(key::CONCURRENCY),
            xudp_concurrency: query.get_parsed(key::XUDP_CONCURRENCY),
            xudp_proxy_udp443: Some(
                query.get_enum_or(key::XUDP_PROXY_UDP443, default::XUDP_PROXY_UDP443)?,
            ),
        })
    }
}

/// A complete outbound
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundObject {
    /// Local address to send from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_through: Option<String>,
    /// Protocol identity
    pub protocol: Protocol,
    /// Protocol settings
    pub settings: OutboundSettings,
    /// Outbound tag (link remark)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Transport and security
    pub stream_settings: StreamSettings,
    /// Multiplexing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mux: Option<MuxSettings>,
}

impl OutboundObject {
    /// First `vnext` server of a VLESS outbound
    pub fn vless_server(&self) -> Option<&VlessServer> {
        match &self.settings {
            OutboundSettings::Vless(settings) => settings.vnext.first(),
        }
    }

    /// Canonical JSON value
    ///
    /// # Errors
    ///
    /// `Serialize` if rendering fails.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Canonical compact JSON text
    ///
    /// # Errors
    ///
    /// `Serialize` if rendering fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Canonical JSON text, indented
    ///
    /// # Errors
    ///
    /// `Serialize` if rendering fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
