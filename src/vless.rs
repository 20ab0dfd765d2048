//! VLESS link parser
//!
//! URI format (RFC 3986): `vless://<id>@<address>:<port>[?<query>][#<fragment>]`
//!
//! **Required**: `id` (user UUID), `address` (host or IP), `port` (1–65535).
//!
//! **Query parameters** (optional, `application/x-www-form-urlencoded`):
//!
//! | parameter | meaning |
//! |-----------|---------|
//! | `encryption` | user encryption, default `none` |
//! | `flow` | `xtls-rprx-vision` / `xtls-rprx-vision-udp443` |
//! | `level` | user level, ignored if not an integer (negative values are kept) |
//! | `security` / `tls` | `none` (default), `tls`, `reality` |
//! | `type` / `network` | `raw`/`tcp`, `xhttp`, `kcp`, `grpc`, `ws`, `httpupgrade` |
//! | TLS / REALITY | see [`crate::security`] |
//! | XHTTP | `host`, `path`, `mode`, `extra`, see [`crate::transport`] |
//! | `mux`, `concurrency`, `xudp_concurrency`, `xudp_proxyUDP443` | multiplexing |
//!
//! **Fragment**: Percent-decoded into the outbound tag; an empty fragment means no tag.
//!
//! ## Parsing rules
//!
//! 1. Surrounding whitespace is ignored. Scheme `vless` is case-insensitive; any other scheme is `NotVlessUrl`.
//! 2. Missing id, host or port, or an unparsable URI, is `MalformedUrl`.
//!    The host is percent-decoded and lower-cased.
//! 3. A parameter outside its closed value set is `InvalidEnumValue` and fails the whole link.
//! 4. Malformed numbers (`level`, `concurrency`, ...) are treated as absent.

use crate::OutboundParser;
use crate::constants::{default, key, scheme};
use crate::enums::Protocol;
use crate::error::{ParseError, Result};
use crate::options::ParseOptions;
use crate::outbound::{
    MuxSettings, OutboundObject, OutboundSettings, VlessServer, VlessUser, VnextSettings,
};
use crate::query::QueryParams;
use crate::stream::StreamSettings;
use tracing::trace;
use url::{Host, Url};

/// VLESS link parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VLess;

impl OutboundParser for VLess {
    const SCHEME: &'static str = scheme::VLESS;

    fn parse_with(link: &str, options: &ParseOptions) -> Result<OutboundObject> {
        trace!("parsing VLESS link");

        let link = link.trim();
        let (link_scheme, _) = link.split_once(scheme::SEPARATOR).ok_or_else(|| {
            ParseError::MalformedUrl(format!("missing `{}`", scheme::SEPARATOR))
        })?;
        if !link_scheme.eq_ignore_ascii_case(scheme::VLESS) {
            return Err(ParseError::NotVlessUrl(link_scheme.to_string()));
        }

        let url = Url::parse(link)?;

        let id = url.username();
        if id.is_empty() {
            return Err(ParseError::MalformedUrl("missing user id".to_string()));
        }
        let address = host_to_address(url.host())?;
        let port = url
            .port()
            .ok_or_else(|| ParseError::MalformedUrl("missing port".to_string()))?;

        let query = QueryParams::from(&url);

        let user = VlessUser {
            id: id.to_string(),
            encryption: query.get_or(key::ENCRYPTION, default::ENCRYPTION).to_string(),
            flow: query.get_enum(key::FLOW)?,
            level: query.get_parsed(key::LEVEL),
        };
        let stream_settings = StreamSettings::from_query(&query, options)?;
        let mux = MuxSettings::from_query(&query)?;

        Ok(OutboundObject {
            send_through: None,
            protocol: Protocol::Vless,
            settings: OutboundSettings::Vless(VnextSettings {
                vnext: vec![VlessServer {
                    address,
                    port,
                    users: vec![user],
                }],
            }),
            tag: decode_tag(url.fragment()),
            stream_settings,
            mux: Some(mux),
        })
    }
}

/// Hosts of a `vless` URL are opaque to `url`, so domains arrive
/// percent-encoded and in their original case. IPv6 literals come back
/// without brackets.
fn host_to_address(host: Option<Host<&str>>) -> Result<String> {
    let missing = || ParseError::MalformedUrl("missing host".to_string());
    match host.ok_or_else(missing)? {
        Host::Domain("") => Err(missing()),
        Host::Domain(domain) => {
            let decoded = urlencoding::decode(domain)
                .map_err(|e| ParseError::MalformedUrl(format!("invalid host: {e}")))?;
            Ok(decoded.to_lowercase())
        }
        Host::Ipv4(addr) => Ok(addr.to_string()),
        Host::Ipv6(addr) => Ok(addr.to_string()),
    }
}

fn decode_tag(fragment: Option<&str>) -> Option<String> {
    let decoded = urlencoding::decode(fragment?).ok()?;
    (!decoded.is_empty()).then(|| decoded.into_owned())
}
