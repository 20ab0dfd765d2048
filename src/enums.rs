//! Closed value sets used across the outbound schema
//!
//! Each enum maps one-to-one onto a lowercase wire token. Parsing a token is
//! exact (case-sensitive); anything outside the set fails with
//! [`ParseError::InvalidEnumValue`] naming the enum and the offending token.
//! Serde goes through the same token table, so deserialization validates too.

use crate::error::{ParseError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $label:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical wire token
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $token $(| $alias)* => Ok($name::$variant), )+
                    other => Err(ParseError::invalid_enum($label, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
                let token = String::deserialize(d)?;
                token.parse().map_err(D::Error::custom)
            }
        }
    };
}

token_enum! {
    /// Outbound protocol identity
    pub enum Protocol as "protocol" {
        /// Drops all traffic
        Blackhole => "blackhole",
        /// DNS interception
        Dns => "dns",
        /// Direct connection
        Freedom => "freedom",
        /// HTTP proxy
        Http => "http",
        /// Loop back into the inbound pipeline
        Loopback => "loopback",
        /// Shadowsocks
        Shadowsocks => "shadowsocks",
        /// SOCKS proxy
        Socks => "socks",
        /// Trojan
        Trojan => "trojan",
        /// VLESS
        Vless => "vless",
        /// VMess
        Vmess => "vmess",
        /// WireGuard
        Wireguard => "wireguard",
    }
}

token_enum! {
    /// Transport carrying the stream
    ///
    /// `tcp` is the legacy name of `raw` and parses to [`Network::Raw`].
    pub enum Network as "network" {
        /// Plain TCP
        Raw => "raw" | "tcp",
        /// HTTP-based split transport
        Xhttp => "xhttp",
        /// mKCP
        Kcp => "kcp",
        /// gRPC
        Grpc => "grpc",
        /// WebSocket
        Ws => "ws",
        /// HTTP upgrade
        HttpUpgrade => "httpupgrade",
    }
}

token_enum! {
    /// Transport-layer security mode
    pub enum Security as "security" {
        /// No encryption
        None => "none",
        /// Standard TLS
        Tls => "tls",
        /// REALITY camouflage
        Reality => "reality",
    }
}

token_enum! {
    /// uTLS client-hello fingerprint
    pub enum Fingerprint as "fingerprint" {
        /// Chrome
        Chrome => "chrome",
        /// Firefox
        Firefox => "firefox",
        /// Safari
        Safari => "safari",
        /// iOS
        Ios => "ios",
        /// Android
        Android => "android",
        /// Edge
        Edge => "edge",
        /// 360 browser
        Qihoo360 => "360",
        /// QQ browser
        Qq => "qq",
        /// Random pick among recent browsers
        Random => "random",
        /// Fully randomized fingerprint
        Randomized => "randomized",
        /// Go's own TLS stack, no emulation
        Unsafe => "unsafe",
    }
}

token_enum! {
    /// VLESS flow control
    pub enum Flow as "flow" {
        /// XTLS Vision
        XtlsRprxVision => "xtls-rprx-vision",
        /// XTLS Vision, also covering UDP/443
        XtlsRprxVisionUdp443 => "xtls-rprx-vision-udp443",
    }
}

token_enum! {
    /// XHTTP upload/download mode
    pub enum XhttpMode as "xhttp mode" {
        /// Streaming upload
        StreamUp => "stream-up",
        /// Single bidirectional stream
        StreamOne => "stream-one",
        /// Upload split into POST packets
        PacketUp => "packet-up",
        /// Chosen by the core
        Auto => "auto",
    }
}

token_enum! {
    /// Mux handling of UDP/443 (QUIC) traffic
    pub enum XudpProxyUdp443 as "xudpProxyUDP443" {
        /// Refuse the traffic
        Reject => "reject",
        /// Carry it over mux
        Allow => "allow",
        /// Bypass mux
        Skip => "skip",
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Raw
    }
}

impl Default for Security {
    fn default() -> Self {
        Security::None
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Fingerprint::Chrome
    }
}

impl Default for XudpProxyUdp443 {
    fn default() -> Self {
        XudpProxyUdp443::Skip
    }
}
