//! Alias-aware lookup over a decoded link query
//!
//! The query is decoded as `application/x-www-form-urlencoded` into a
//! multimap (key → values in link order). Blank values are dropped while
//! decoding, so `?flow=` behaves exactly like a link without `flow`.
//!
//! Every lookup takes a list of aliases in priority order and returns the
//! first value of the first alias present. Typed lookups degrade to `None`
//! when coercion fails; enum lookups are the only ones that can error.

use crate::error::{ParseError, Result};
use std::collections::HashMap;
use std::str::FromStr;
use url::Url;

/// Decoded query multimap of a link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
}

impl QueryParams {
    /// Decode a raw query string (without the leading `?`)
    pub fn parse(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    fn from_pairs(pairs: impl Iterator<Item = (String, String)>) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            values.entry(key).or_default().push(value);
        }
        QueryParams { values }
    }

    /// Whether no parameter survived decoding
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First value of the first alias present
    pub fn get(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.values.get(*key))
            .find_map(|values| values.first())
            .map(String::as_str)
    }

    /// Like [`get`](Self::get), falling back to `default`
    pub fn get_or<'a>(&'a self, keys: &[&str], default: &'a str) -> &'a str {
        self.get(keys).unwrap_or(default)
    }

    /// Coerced lookup; a value that does not parse as `T` counts as absent
    pub fn get_parsed<T: FromStr>(&self, keys: &[&str]) -> Option<T> {
        self.get(keys).and_then(|value| value.trim().parse().ok())
    }

    /// Optional enum lookup: absent stays `None`, an out-of-set token is an error
    pub fn get_enum<E>(&self, keys: &[&str]) -> Result<Option<E>>
    where
        E: FromStr<Err = ParseError>,
    {
        self.get(keys).map(str::parse::<E>).transpose()
    }

    /// Enum lookup with a default token, validated like any other value
    pub fn get_enum_or<E>(&self, keys: &[&str], default: &str) -> Result<E>
    where
        E: FromStr<Err = ParseError>,
    {
        self.get_or(keys, default).parse()
    }
}

impl From<&Url> for QueryParams {
    fn from(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs().into_owned())
    }
}
