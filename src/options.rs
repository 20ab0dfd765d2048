//! Integrator-chosen parsing defaults
//!
//! Historical link producers disagree on what a link without `type` means
//! (`raw` in older schemas, `tcp` in newer ones). `tcp` is the legacy name of
//! `raw`, so both produce the same outbound, but the fallback network stays a
//! configuration knob rather than a constant.
//!
//! Options deserialize from the integrator's own config file:
//!
//! ```rust
//! use xray_link_serde::{Network, ParseOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options: ParseOptions = serde_json::from_str(r#"{"defaultNetwork":"xhttp"}"#)?;
//! assert_eq!(options.default_network, Network::Xhttp);
//! # Ok(())
//! # }
//! ```

use crate::enums::Network;
use serde::{Deserialize, Serialize};

/// Defaults applied while parsing links
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Network used when a link names neither `type` nor `network`
    pub default_network: Network,
}

impl ParseOptions {
    /// Options with a different fallback network
    pub fn with_default_network(mut self, network: Network) -> Self {
        self.default_network = network;
        self
    }
}
