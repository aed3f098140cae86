//! Filter Parameters
//!
//! List filter state mirrored to and from the URL query string
//! (`type`, `search`, `sort`) so it survives navigation.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::catalog::ALL_TYPES;
use crate::models::SortKey;
use crate::pagination::ListQuery;

pub const PARAM_TYPE: &str = "type";
pub const PARAM_SEARCH: &str = "search";
pub const PARAM_SORT: &str = "sort";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub sort_key: SortKey,
    pub type_filter: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_key: SortKey::Name,
            type_filter: ALL_TYPES.to_string(),
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

impl FilterState {
    /// Build from key-value pairs; unknown keys are ignored and an invalid
    /// `sort` falls back to name.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = Self::default();
        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                PARAM_TYPE if !value.is_empty() => state.type_filter = value.to_string(),
                PARAM_SEARCH => state.query = value.to_string(),
                PARAM_SORT => state.sort_key = SortKey::parse_or_default(Some(value)),
                _ => {}
            }
        }
        state
    }

    /// Parse `?type=fire&search=char&sort=id` (leading `?` optional)
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            });
        Self::from_params(pairs)
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            (PARAM_TYPE, self.type_filter.clone()),
            (PARAM_SEARCH, self.query.clone()),
            (PARAM_SORT, self.sort_key.as_str().to_string()),
        ]
    }

    pub fn to_query_string(&self) -> String {
        self.to_params()
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, NON_ALPHANUMERIC)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query = term.into();
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    pub fn set_type(&mut self, type_filter: impl Into<String>) {
        self.type_filter = type_filter.into();
    }

    /// List parameters for a source, with the (debounced) search text
    pub fn list_query(&self, search: &str, limit: u32) -> ListQuery {
        ListQuery {
            limit,
            search: search.to_string(),
            type_filter: self.type_filter.clone(),
            sort_key: self.sort_key,
        }
    }
}
