//! `streamSettings`: transport and security envelope of an outbound
//!
//! Both halves are enums carrying their own settings object, so a stream can
//! never say `security: "tls"` without `tlsSettings`, or carry `rawSettings`
//! next to `network: "xhttp"`. Serialization flattens them back into the
//! core's field layout:
//!
//! | source | field |
//! |--------|-------|
//! | [`TransportConfig::network`] | `network` |
//! | [`SecurityConfig::security`] | `security` |
//! | [`SecurityConfig::Tls`] | `tlsSettings` |
//! | [`SecurityConfig::Reality`] | `realitySettings` |
//! | [`TransportConfig::Raw`] | `rawSettings` |
//! | [`TransportConfig::Xhttp`] | `xhttpSettings` |

use crate::enums::{Network, Security};
use crate::error::Result;
use crate::options::ParseOptions;
use crate::query::QueryParams;
use crate::security::{RealitySettings, SecurityConfig, TlsSettings};
use crate::transport::{RawSettings, TransportConfig, XhttpSettings};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// `streamSettings` object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamSettings {
    /// Network and its settings
    pub transport: TransportConfig,
    /// Security mode and its settings
    pub security: SecurityConfig,
}

impl StreamSettings {
    /// Build both halves from link parameters
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` from any enum-bearing parameter.
    pub fn from_query(query: &QueryParams, options: &ParseOptions) -> Result<Self> {
        let security = SecurityConfig::from_query(query)?;
        let transport = TransportConfig::from_query(query, options.default_network)?;
        Ok(StreamSettings {
            transport,
            security,
        })
    }

    /// `network` token
    pub fn network(&self) -> Network {
        self.transport.network()
    }

    /// `security` token
    pub fn security_mode(&self) -> Security {
        self.security.security()
    }

    /// `tlsSettings`, present iff security is `tls`
    pub fn tls_settings(&self) -> Option<&TlsSettings> {
        match &self.security {
            SecurityConfig::Tls(tls) => Some(tls),
            _ => None,
        }
    }

    /// `realitySettings`, present iff security is `reality`
    pub fn reality_settings(&self) -> Option<&RealitySettings> {
        match &self.security {
            SecurityConfig::Reality(reality) => Some(reality),
            _ => None,
        }
    }

    /// `rawSettings`, present iff network is `raw`
    pub fn raw_settings(&self) -> Option<&RawSettings> {
        match &self.transport {
            TransportConfig::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// `xhttpSettings`, present iff network is `xhttp`
    pub fn xhttp_settings(&self) -> Option<&XhttpSettings> {
        match &self.transport {
            TransportConfig::Xhttp(xhttp) => Some(xhttp),
            _ => None,
        }
    }
}

impl Serialize for StreamSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("network", &self.network())?;
        map.serialize_entry("security", &self.security_mode())?;
        match &self.security {
            SecurityConfig::None => {}
            SecurityConfig::Tls(tls) => map.serialize_entry("tlsSettings", tls)?,
            SecurityConfig::Reality(reality) => map.serialize_entry("realitySettings", reality)?,
        }
        match &self.transport {
            TransportConfig::Raw(raw) => map.serialize_entry("rawSettings", raw)?,
            TransportConfig::Xhttp(xhttp) => map.serialize_entry("xhttpSettings", xhttp)?,
            TransportConfig::Other(_) => {}
        }
        map.end()
    }
}
