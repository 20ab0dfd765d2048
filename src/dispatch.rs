//! Scheme dispatch and per-link fault isolation
//!
//! [`Dispatcher::parse_link`] routes a link to the parser registered for its
//! scheme and returns whatever that parser returns. [`Dispatcher::parse_any`]
//! is the only place where errors stop: a failing link is logged and turned
//! into `None`, so one bad entry never takes a subscription down with it.

use crate::OutboundParser;
use crate::constants::scheme;
use crate::error::{ParseError, Result};
use crate::options::ParseOptions;
use crate::outbound::OutboundObject;
use crate::vless::VLess;
use std::collections::HashMap;
use tracing::{debug, warn};

type ParseFn = fn(&str, &ParseOptions) -> Result<OutboundObject>;

/// Registry of link parsers keyed by lowercase scheme
#[derive(Debug, Clone)]
pub struct Dispatcher {
    options: ParseOptions,
    parsers: HashMap<&'static str, ParseFn>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new(ParseOptions::default())
    }
}

impl Dispatcher {
    /// Dispatcher with every built-in parser registered
    pub fn new(options: ParseOptions) -> Self {
        let mut dispatcher = Dispatcher {
            options,
            parsers: HashMap::new(),
        };
        dispatcher.register::<VLess>();
        dispatcher
    }

    /// Register (or replace) the parser for `P::SCHEME`
    pub fn register<P: OutboundParser>(&mut self) {
        self.parsers.insert(P::SCHEME, P::parse_with);
    }

    /// Options handed to every parser
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Whether a parser is registered for `scheme` (case-insensitive)
    pub fn supports(&self, scheme: &str) -> bool {
        self.parsers.contains_key(scheme.to_lowercase().as_str())
    }

    /// Parse one link, surfacing every error
    ///
    /// # Errors
    ///
    /// `MalformedUrl` for empty input or a link without `://`,
    /// `UnsupportedScheme` when no parser is registered, and anything the
    /// protocol parser returns.
    pub fn parse_link(&self, link: &str) -> Result<OutboundObject> {
        let link = link.trim();
        if link.is_empty() {
            return Err(ParseError::MalformedUrl("empty link".to_string()));
        }
        let (link_scheme, _) = link.split_once(scheme::SEPARATOR).ok_or_else(|| {
            ParseError::MalformedUrl(format!("missing `{}`", scheme::SEPARATOR))
        })?;
        let link_scheme = link_scheme.to_lowercase();
        let parse = self
            .parsers
            .get(link_scheme.as_str())
            .ok_or(ParseError::UnsupportedScheme(link_scheme))?;
        parse(link, &self.options)
    }

    /// Parse one link, logging and swallowing any failure
    ///
    /// Blank input yields `None` without a log line.
    pub fn parse_any(&self, link: &str) -> Option<OutboundObject> {
        if link.trim().is_empty() {
            return None;
        }
        match self.parse_link(link) {
            Ok(outbound) => {
                debug!(protocol = %outbound.protocol, tag = ?outbound.tag, "parsed link");
                Some(outbound)
            }
            Err(err) => {
                warn!(scheme = scheme_of(link), error = %err, "skipping link");
                None
            }
        }
    }

    /// [`parse_any`](Self::parse_any) rendered as canonical JSON
    pub fn parse_as_value(&self, link: &str) -> Option<serde_json::Value> {
        let outbound = self.parse_any(link)?;
        match outbound.to_value() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, "failed to render outbound");
                None
            }
        }
    }

    /// Parse many links, keeping input order and skipping failures
    pub fn parse_batch<I>(&self, links: I) -> Vec<OutboundObject>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        links
            .into_iter()
            .filter_map(|link| self.parse_any(link.as_ref()))
            .collect()
    }
}

fn scheme_of(link: &str) -> &str {
    link.trim()
        .split_once(scheme::SEPARATOR)
        .map_or("?", |(scheme, _)| scheme)
}
