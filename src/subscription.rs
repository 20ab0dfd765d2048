//! Subscription bodies: many links, one per line
//!
//! A subscription is served either as plain text or as Base64 of that text.
//! A body that already contains `://` is taken as plain text; anything else
//! is Base64-decoded, trying the standard, URL-safe and unpadded alphabets
//! with whitespace removed.

use crate::constants::scheme;
use crate::dispatch::Dispatcher;
use crate::error::{ParseError, Result};
use crate::outbound::OutboundObject;
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use tracing::debug;

/// Decoded subscription: the links it lists, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscription {
    /// Non-blank, trimmed lines
    pub links: Vec<String>,
}

impl Subscription {
    /// Split a subscription body into links
    ///
    /// # Errors
    ///
    /// `MalformedSubscription` when a non-plain body is not Base64 of UTF-8 text.
    pub fn decode(body: &str) -> Result<Self> {
        let body = body.trim();
        let text = if body.is_empty() || body.contains(scheme::SEPARATOR) {
            body.to_string()
        } else {
            decode_base64(body)?
        };

        let links: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        debug!(links = links.len(), "decoded subscription");
        Ok(Subscription { links })
    }

    /// Decode and parse with default options
    ///
    /// # Errors
    ///
    /// See [`decode`](Self::decode). Individual bad links are skipped, not errors.
    pub fn parse(body: &str) -> Result<Vec<OutboundObject>> {
        Ok(Subscription::decode(body)?.parse_with(crate::default_dispatcher()))
    }

    /// Parse every link, keeping order and skipping failures
    pub fn parse_with(&self, dispatcher: &Dispatcher) -> Vec<OutboundObject> {
        dispatcher.parse_batch(&self.links)
    }
}

fn decode_base64(body: &str) -> Result<String> {
    let cleaned: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(&cleaned)
        .or_else(|_| URL_SAFE.decode(&cleaned))
        .or_else(|_| STANDARD_NO_PAD.decode(&cleaned))
        .or_else(|_| URL_SAFE_NO_PAD.decode(&cleaned))?;
    String::from_utf8(bytes).map_err(|e| ParseError::MalformedSubscription(e.to_string()))
}
