//! ALPN flags and their token-list encoding
//!
//! Links carry ALPN as one comma-joined string (`alpn=h2,http/1.1`); the
//! outbound schema wants a JSON array. [`Alpn`] sits between the two as a set
//! of flags.
//!
//! Decoding uses substring containment, so `h2c` also turns on `h2`.
//! Encoding always emits tokens in the order `h2`, `http/1.1`, `h3`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const FROM_MITM: &str = "FromMitM";
const HTTP_1_1: &str = "http/1.1";
const H2: &str = "h2";
const H3: &str = "h3";

/// ALPN protocols offered in the TLS handshake
///
/// `from_mitm` asks the core to reuse the ALPN of the connection decrypted by
/// the inbound; when set, the other flags are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Alpn {
    /// `http/1.1`
    pub h1: bool,
    /// `h2`
    pub h2: bool,
    /// `h3`
    pub h3: bool,
    /// `FromMitM` sentinel
    pub from_mitm: bool,
}

impl Alpn {
    /// The `FromMitM` sentinel
    pub fn from_mitm() -> Self {
        Alpn {
            from_mitm: true,
            ..Alpn::default()
        }
    }

    /// Decode a comma-joined token string
    pub fn decode(value: &str) -> Self {
        if value == FROM_MITM {
            return Alpn::from_mitm();
        }
        Alpn {
            h1: value.contains(HTTP_1_1),
            h2: value.contains(H2),
            h3: value.contains(H3),
            from_mitm: false,
        }
    }

    /// Encode as tokens in wire order
    pub fn encode(&self) -> Vec<&'static str> {
        if self.from_mitm {
            return vec![FROM_MITM];
        }
        [(self.h2, H2), (self.h1, HTTP_1_1), (self.h3, H3)]
            .into_iter()
            .filter_map(|(set, token)| set.then_some(token))
            .collect()
    }
}

impl Serialize for Alpn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.encode())
    }
}

impl<'de> Deserialize<'de> for Alpn {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let tokens = Vec::<String>::deserialize(d)?;
        Ok(Alpn::decode(&tokens.join(",")))
    }
}
