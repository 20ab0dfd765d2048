//! # Xray Link Serde
//!
//! Decodes proxy subscription links into typed Xray outbound configuration and
//! renders it back as canonical JSON.
//!
//! ## Features
//!
//! - Parse `vless://` links into an [`OutboundObject`] graph
//! - TLS and REALITY security, raw and XHTTP transports, mux
//! - Canonical JSON output matching the core's outbound schema
//! - Per-link fault isolation for whole subscriptions
//!
//! ## Link format and parsing rules (unified)
//!
//! - **Scheme**: Text before the first `://`, case-insensitive.
//! - **Query string**: Parsed as `application/x-www-form-urlencoded`; parameter names are
//!   case-sensitive; blank values count as absent; the first value of a repeated key wins.
//! - **Aliases**: Most parameters have several accepted names (`sni`/`server_name`,
//!   `pbk`/`publickey`/`pubkey`, ...), tried in a fixed priority order.
//! - **Fragment (`#`)**: Percent-decoded into the outbound tag.
//! - **Errors**: Bad structure → `MalformedUrl`; wrong scheme for a parser → `NotVlessUrl`;
//!   unknown scheme → `UnsupportedScheme`; out-of-set token → `InvalidEnumValue`.
//!
//! ## Canonical JSON
//!
//! - Field names are lower camelCase; absent values are omitted, never `null`.
//! - VLESS settings are wrapped as `{"vnext": [ ... ]}`.
//! - ALPN is a flat token list (`["h2", "http/1.1"]`).
//! - XHTTP `extra.downloadSettings` is never emitted.
//!
//! ## Example
//!
//! ```rust
//! use xray_link_serde::{OutboundParser, VLess};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let outbound = VLess::parse("vless://uuid@example.com:443?security=tls&sni=example.com#Node")?;
//! let json = outbound.to_json()?;
//! assert!(json.contains(r#""protocol":"vless""#));
//!
//! // Bad links in a batch are skipped, not fatal
//! let parsed = xray_link_serde::parse_any("trojan://pw@example.com:443");
//! assert!(parsed.is_none());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod constants;
mod error;

pub mod alpn;
pub mod dispatch;
pub mod enums;
pub mod options;
pub mod outbound;
pub mod query;
pub mod security;
pub mod stream;
pub mod subscription;
pub mod transport;
pub mod vless;


pub use alpn::Alpn;
pub use dispatch::Dispatcher;
pub use enums::{Fingerprint, Flow, Network, Protocol, Security, XhttpMode, XudpProxyUdp443};
pub use error::{ParseError, Result};
pub use options::ParseOptions;
pub use outbound::{
    MuxSettings, OutboundObject, OutboundSettings, VlessServer, VlessUser, VnextSettings,
};
pub use query::QueryParams;
pub use security::{RealitySettings, SecurityConfig, TlsSettings};
pub use stream::StreamSettings;
pub use subscription::Subscription;
pub use transport::{RawSettings, TransportConfig, XhttpExtra, XhttpMux, XhttpSettings};
pub use vless::VLess;

use std::sync::OnceLock;

/// Trait for link parsers producing an outbound
pub trait OutboundParser {
    /// Lowercase scheme this parser handles
    const SCHEME: &'static str;

    /// Parse a link with explicit options
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the link is malformed, has another scheme or
    /// carries an out-of-set enum value.
    fn parse_with(link: &str, options: &ParseOptions) -> Result<OutboundObject>;

    /// Parse a link with default options
    ///
    /// # Errors
    ///
    /// See [`parse_with`](Self::parse_with).
    ///
    /// # Example
    ///
    /// ```rust
    /// use xray_link_serde::{OutboundParser, VLess};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let outbound = VLess::parse("vless://uuid@example.com:443?mux=true&concurrency=8")?;
    /// assert_eq!(outbound.mux.unwrap().concurrency, Some(8));
    /// # Ok(())
    /// # }
    /// ```
    fn parse(link: &str) -> Result<OutboundObject> {
        Self::parse_with(link, &ParseOptions::default())
    }
}

fn default_dispatcher() -> &'static Dispatcher {
    static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();
    DISPATCHER.get_or_init(Dispatcher::default)
}

/// Parse any supported link with default options, surfacing errors
///
/// # Errors
///
/// See [`Dispatcher::parse_link`].
pub fn parse_link(link: &str) -> Result<OutboundObject> {
    default_dispatcher().parse_link(link)
}

/// Parse any supported link with default options; failures are logged and
/// become `None`
pub fn parse_any(link: &str) -> Option<OutboundObject> {
    default_dispatcher().parse_any(link)
}
