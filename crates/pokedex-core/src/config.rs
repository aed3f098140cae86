//! Application Configuration
//!
//! Endpoints and tuning knobs. Defaults target the public PokeAPI; each
//! value can be overridden at build time through `POKEDEX_*` variables.

use log::warn;

pub const DEFAULT_GRAPHQL_URI: &str = "https://beta.pokeapi.co/graphql/v1beta";
pub const DEFAULT_REST_URI: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_SPRITES_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub graphql_uri: String,
    pub rest_base_uri: String,
    pub sprites_base: String,
    pub page_limit: u32,
    pub search_debounce_ms: u64,
    pub scroll_root_margin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_uri: DEFAULT_GRAPHQL_URI.to_string(),
            rest_base_uri: DEFAULT_REST_URI.to_string(),
            sprites_base: DEFAULT_SPRITES_BASE.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            scroll_root_margin: crate::scroll::DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str, fallback: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("[CONFIG] Ignoring non-numeric {}={:?}", key, raw);
            fallback
        }
    }
}

impl AppConfig {
    /// Build from a key lookup; missing or empty values keep the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            graphql_uri: get("POKEDEX_GRAPHQL_URI").unwrap_or(defaults.graphql_uri),
            rest_base_uri: get("POKEDEX_REST_URI")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.rest_base_uri),
            sprites_base: get("POKEDEX_SPRITES_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.sprites_base),
            page_limit: get("POKEDEX_PAGE_LIMIT")
                .map(|v| parse_number("POKEDEX_PAGE_LIMIT", &v, defaults.page_limit))
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_PAGE_LIMIT),
            search_debounce_ms: get("POKEDEX_SEARCH_DEBOUNCE_MS")
                .map(|v| parse_number("POKEDEX_SEARCH_DEBOUNCE_MS", &v, defaults.search_debounce_ms))
                .unwrap_or(defaults.search_debounce_ms),
            scroll_root_margin: defaults.scroll_root_margin,
        }
    }

    /// Values baked in at compile time
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "POKEDEX_GRAPHQL_URI" => option_env!("POKEDEX_GRAPHQL_URI"),
                "POKEDEX_REST_URI" => option_env!("POKEDEX_REST_URI"),
                "POKEDEX_SPRITES_BASE" => option_env!("POKEDEX_SPRITES_BASE"),
                "POKEDEX_PAGE_LIMIT" => option_env!("POKEDEX_PAGE_LIMIT"),
                "POKEDEX_SEARCH_DEBOUNCE_MS" => option_env!("POKEDEX_SEARCH_DEBOUNCE_MS"),
                _ => None,
            };
            value.map(String::from)
        })
    }
}
