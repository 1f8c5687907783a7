//! Deep-linkable query state: `q` and `page` in the URL query string

use std::collections::BTreeMap;
use std::fmt;

pub const QUERY_PARAM: &str = "q";
pub const PAGE_PARAM: &str = "page";

/// Decoded URL query parameters
///
/// Only the first occurrence of a repeated name is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams(BTreeMap<String, String>);

impl UrlParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `?a=1&b=two%20words` (leading `?` optional, `+` is a space)
    pub fn parse(query_string: &str) -> Self {
        let mut params = BTreeMap::new();
        let trimmed = query_string.strip_prefix('?').unwrap_or(query_string);

        for pair in trimmed.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            params
                .entry(decode_component(name))
                .or_insert_with(|| decode_component(value));
        }

        Self(params)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write `state` into the params, leaving unrelated ones alone
    ///
    /// Defaults are omitted: no `q` for an empty query, no `page` for page 1.
    pub fn merge_query(&mut self, key: &QueryKey) {
        if key.query.is_empty() {
            self.remove(QUERY_PARAM);
        } else {
            self.set(QUERY_PARAM, key.query.clone());
        }

        if key.page > 1 {
            self.set(PAGE_PARAM, key.page.to_string());
        } else {
            self.remove(PAGE_PARAM);
        }
    }

    /// Encoded form without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for UrlParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            write!(f, "?{}", self.to_query_string())
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Read a `page` parameter; anything that is not a number >= 1 means page 1
///
/// Fractional pages are truncated, so `"2.7"` is page 2.
pub fn normalize_page(raw: Option<&str>) -> u32 {
    let raw = match raw.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return 1,
    };

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => 1,
    }
}

/// The `(query, page)` pair identifying one logical search request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub query: String,
    pub page: u32,
}

impl QueryKey {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }

    /// Non-default means the URL (or the user) asked for something specific
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.page == 1
    }
}

impl Default for QueryKey {
    fn default() -> Self {
        Self::new("", 1)
    }
}

/// What the explore page is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub query: String,
    pub page: u32,
    /// Set by any search, page change, or non-default URL; gates whether an
    /// empty page reads as "no results" or as the neutral initial state
    pub has_interacted: bool,
}

impl QueryState {
    pub fn from_url(params: &UrlParams) -> Self {
        let key = QueryKey::new(
            params.get(QUERY_PARAM).unwrap_or_default(),
            normalize_page(params.get(PAGE_PARAM)),
        );

        Self {
            has_interacted: !key.is_default(),
            query: key.query,
            page: key.page,
        }
    }

    pub fn key(&self) -> QueryKey {
        QueryKey::new(self.query.clone(), self.page)
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            has_interacted: false,
        }
    }
}
