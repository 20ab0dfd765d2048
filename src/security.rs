//! TLS and REALITY settings built from link parameters
//!
//! | field | aliases | default |
//! |-------|---------|---------|
//! | `serverName` | `server_name`, `sni` | absent |
//! | `allowInsecure` (TLS) | `allow_insecure`, `allowInsecure` | `false`; only `1`/`true` enable it |
//! | `alpn` (TLS) | `alpn` | `http/1.1,h2` |
//! | `fingerprint` | `fingerprint`, `fp` | `chrome` |
//! | `shortId` (REALITY) | `short_id`, `sid` | absent |
//! | `publicKey` (REALITY) | `pubkey`, `publickey`, `pbk` | absent |
//! | `mldsa65Verify` (REALITY) | `mldsa65`, `pqv` | absent |
//! | `spiderX` (REALITY) | `spx`, `spiderx` | absent |

use crate::alpn::Alpn;
use crate::constants::{TRUTHY, default, key};
use crate::enums::{Fingerprint, Security};
use crate::error::Result;
use crate::query::QueryParams;
use serde::{Deserialize, Serialize};

/// `tlsSettings` object
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TlsSettings {
    /// SNI sent in the client hello
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// Skip certificate verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_insecure: Option<bool>,
    /// ALPN list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn: Option<Alpn>,
    /// uTLS fingerprint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

impl TlsSettings {
    /// Build from link parameters
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` when `fp` is not a known fingerprint.
    pub fn from_query(query: &QueryParams) -> Result<Self> {
        let allow_insecure = query
            .get(key::ALLOW_INSECURE)
            .is_some_and(|value| TRUTHY.contains(&value));

        Ok(TlsSettings {
            server_name: query.get(key::SERVER_NAME).map(str::to_string),
            allow_insecure: Some(allow_insecure),
            alpn: Some(Alpn::decode(query.get_or(key::ALPN, default::ALPN))),
            fingerprint: Some(query.get_enum_or(key::FINGERPRINT, default::FINGERPRINT)?),
        })
    }
}

/// `realitySettings` object
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RealitySettings {
    /// SNI of the camouflage target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// uTLS fingerprint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
    /// Short id shared with the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
    /// Server x25519 public key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// ML-DSA-65 public key for certificate verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mldsa65_verify: Option<String>,
    /// Initial crawler path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spider_x: Option<String>,
}

impl RealitySettings {
    /// Build from link parameters
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` when `fp` is not a known fingerprint.
    pub fn from_query(query: &QueryParams) -> Result<Self> {
        let text = |keys: &[&str]| query.get(keys).map(str::to_string);

        Ok(RealitySettings {
            server_name: text(key::SERVER_NAME),
            fingerprint: Some(query.get_enum_or(key::FINGERPRINT, default::FINGERPRINT)?),
            short_id: text(key::SHORT_ID),
            public_key: text(key::PUBLIC_KEY),
            mldsa65_verify: text(key::MLDSA65_VERIFY),
            spider_x: text(key::SPIDER_X),
        })
    }
}

/// Security mode together with its settings object
///
/// Holding the settings inside the variant keeps `security` and
/// `tlsSettings`/`realitySettings` from disagreeing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SecurityConfig {
    /// `security: "none"`, no settings object
    #[default]
    None,
    /// `security: "tls"` with `tlsSettings`
    Tls(TlsSettings),
    /// `security: "reality"` with `realitySettings`
    Reality(RealitySettings),
}

impl SecurityConfig {
    /// Resolve `security`/`tls` (default `none`) and build the matching settings
    ///
    /// # Errors
    ///
    /// `InvalidEnumValue` for an unknown security mode or fingerprint.
    pub fn from_query(query: &QueryParams) -> Result<Self> {
        let security: Security = query.get_enum_or(key::SECURITY, default::SECURITY)?;
        Ok(match security {
            Security::None => SecurityConfig::None,
            Security::Tls => SecurityConfig::Tls(TlsSettings::from_query(query)?),
            Security::Reality => SecurityConfig::Reality(RealitySettings::from_query(query)?),
        })
    }

    /// The `security` token this configuration serializes as
    pub fn security(&self) -> Security {
        match self {
            SecurityConfig::None => Security::None,
            SecurityConfig::Tls(_) => Security::Tls,
            SecurityConfig::Reality(_) => Security::Reality,
        }
    }
}
