//! Shared constants for link schemes, query parameter names and defaults.
//!
//! Every query lookup goes through one of the alias lists below, ordered by
//! priority: the first key present in the link wins.

/// Link scheme names (lowercase, without `://`).
pub mod scheme {
    /// VLESS: `vless://`
    pub const VLESS: &str = "vless";
    /// Separator between scheme and the rest of a link.
    pub const SEPARATOR: &str = "://";
}

/// Query parameter aliases, checked in order.
pub mod key {
    /// VLESS user encryption.
    pub const ENCRYPTION: &[&str] = &["encryption"];
    /// VLESS user flow.
    pub const FLOW: &[&str] = &["flow"];
    /// VLESS user level.
    pub const LEVEL: &[&str] = &["level"];

    /// Stream security mode.
    pub const SECURITY: &[&str] = &["security", "tls"];
    /// Stream transport.
    pub const NETWORK: &[&str] = &["type", "network"];

    /// TLS / REALITY server name.
    pub const SERVER_NAME: &[&str] = &["server_name", "sni"];
    /// TLS certificate check bypass.
    pub const ALLOW_INSECURE: &[&str] = &["allow_insecure", "allowInsecure"];
    /// TLS ALPN list, comma separated.
    pub const ALPN: &[&str] = &["alpn"];
    /// uTLS fingerprint.
    pub const FINGERPRINT: &[&str] = &["fingerprint", "fp"];

    /// REALITY short id.
    pub const SHORT_ID: &[&str] = &["short_id", "sid"];
    /// REALITY server public key.
    pub const PUBLIC_KEY: &[&str] = &["pubkey", "publickey", "pbk"];
    /// REALITY ML-DSA-65 verification key.
    pub const MLDSA65_VERIFY: &[&str] = &["mldsa65", "pqv"];
    /// REALITY spider path.
    pub const SPIDER_X: &[&str] = &["spx", "spiderx"];

    /// XHTTP host header.
    pub const HOST: &[&str] = &["host"];
    /// XHTTP path.
    pub const PATH: &[&str] = &["path"];
    /// XHTTP mode.
    pub const MODE: &[&str] = &["mode"];
    /// XHTTP extra JSON payload.
    pub const EXTRA: &[&str] = &["extra"];

    /// Mux switch.
    pub const MUX: &[&str] = &["mux"];
    /// Mux TCP concurrency.
    pub const CONCURRENCY: &[&str] = &["concurrency"];
    /// Mux XUDP concurrency.
    pub const XUDP_CONCURRENCY: &[&str] = &["xudp_concurrency", "xudpConcurrency"];
    /// Mux policy for UDP/443 traffic.
    pub const XUDP_PROXY_UDP443: &[&str] = &["xudp_proxyUDP443", "xudpProxyUDP443"];
}

/// Values used when a parameter is absent.
pub mod default {
    /// VLESS user encryption.
    pub const ENCRYPTION: &str = "none";
    /// Stream security.
    pub const SECURITY: &str = "none";
    /// TLS ALPN list.
    pub const ALPN: &str = "http/1.1,h2";
    /// uTLS fingerprint.
    pub const FINGERPRINT: &str = "chrome";
    /// Mux switch.
    pub const MUX: &str = "false";
    /// Mux policy for UDP/443 traffic.
    pub const XUDP_PROXY_UDP443: &str = "skip";
}

/// Raw values accepted as "on" for boolean switches (exact match).
pub const TRUTHY: [&str; 2] = ["1", "true"];
