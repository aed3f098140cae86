//! Detail Lookup
//!
//! Single-creature fetch plus the formatting helpers the detail and card
//! views share. A lookup that matches no rows is "not found", which is
//! distinct from a transport failure.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, FetchResult};
use crate::models::FavoriteEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub base_stat: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub types: Vec<String>,
    pub moves: Vec<String>,
    pub stats: Vec<PokemonStat>,
    pub description: String,
}

impl PokemonDetail {
    /// First listed type, used for theming
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or("normal")
    }

    pub fn favorite_entry(&self) -> FavoriteEntry {
        FavoriteEntry::new(self.id, self.name.clone())
    }
}

#[async_trait(?Send)]
pub trait DetailFetcher {
    async fn fetch_detail(&self, id: u32) -> FetchResult<Option<PokemonDetail>>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub pokemon: Option<PokemonDetail>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl DetailState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Finished without a transport error and without a row
    pub fn is_not_found(&self) -> bool {
        !self.loading && self.error.is_none() && self.pokemon.is_none()
    }
}

/// Parse a route id parameter; missing, zero or malformed ids skip the fetch
pub fn parse_id(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

/// Resolve a route parameter into a finished detail state
pub async fn lookup_detail<F: DetailFetcher + ?Sized>(fetcher: &F, raw_id: Option<&str>) -> DetailState {
    let Some(id) = parse_id(raw_id) else {
        debug!("[DETAIL] Skipping lookup for id {:?}", raw_id);
        return DetailState::default();
    };

    match fetcher.fetch_detail(id).await {
        Ok(pokemon) => DetailState {
            pokemon,
            loading: false,
            error: None,
        },
        Err(e) => DetailState {
            pokemon: None,
            loading: false,
            error: Some(e),
        },
    }
}

/// Catalog number as displayed on cards, e.g. `#00025`
pub fn format_number(id: u32) -> String {
    format!("#{:05}", id)
}

/// Short label for a stat name
pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "ATK",
        "defense" => "DEF",
        "special-attack" => "SATK",
        "special-defense" => "SDEF",
        "speed" => "SPD",
        other => other,
    }
}

/// Highest base stat a bar is scaled against
pub const MAX_BASE_STAT: u32 = 255;

/// Highest id the detail view steps through
pub const MAX_POKEMON_ID: u32 = 10325;

/// Stat value padded to three digits, e.g. `045`
pub fn format_stat(base_stat: u32) -> String {
    format!("{:03}", base_stat)
}

/// Bar fill for a stat, 0..=100
pub fn stat_percent(base_stat: u32) -> u32 {
    base_stat.min(MAX_BASE_STAT) * 100 / MAX_BASE_STAT
}

pub fn previous_id(id: u32) -> Option<u32> {
    (id > 1).then(|| id - 1)
}

pub fn next_id(id: u32) -> Option<u32> {
    (id < MAX_POKEMON_ID).then(|| id + 1)
}

/// Sprite URLs for one creature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteUrls {
    /// Small sprite for list cards
    pub list: String,
    /// Official artwork for the detail view
    pub detail: String,
    pub home: String,
    /// SVG artwork; missing for some entries
    pub dream_world: String,
}

pub fn sprite_urls(base: &str, id: u32) -> SpriteUrls {
    let base = base.trim_end_matches('/');
    SpriteUrls {
        list: format!("{}/{}.png", base, id),
        detail: format!("{}/other/official-artwork/{}.png", base, id),
        home: format!("{}/other/home/{}.png", base, id),
        dream_world: format!("{}/other/dream-world/{}.svg", base, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedFetcher {
        result: FetchResult<Option<PokemonDetail>>,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl DetailFetcher for FixedFetcher {
        async fn fetch_detail(&self, _id: u32) -> FetchResult<Option<PokemonDetail>> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn bulbasaur() -> PokemonDetail {
        PokemonDetail {
            id: 1,
            name: "bulbasaur".to_string(),
            height: 7,
            weight: 69,
            types: vec!["grass".to_string(), "poison".to_string()],
            moves: vec![],
            stats: vec![],
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_lookup_found() {
        let fetcher = FixedFetcher { result: Ok(Some(bulbasaur())), calls: Cell::new(0) };
        let state = lookup_detail(&fetcher, Some("1")).await;
        assert_eq!(state.pokemon.as_ref().map(|p| p.primary_type()), Some("grass"));
        assert!(state.error.is_none());
        assert!(!state.is_not_found());
    }

    #[tokio::test]
    async fn test_lookup_not_found_is_not_an_error() {
        let fetcher = FixedFetcher { result: Ok(None), calls: Cell::new(0) };
        let state = lookup_detail(&fetcher, Some("99999")).await;
        assert!(state.is_not_found());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_lookup_transport_error() {
        let fetcher = FixedFetcher {
            result: Err(FetchError::Network("offline".to_string())),
            calls: Cell::new(0),
        };
        let state = lookup_detail(&fetcher, Some("1")).await;
        assert!(state.error.is_some());
        assert!(!state.is_not_found());
    }

    #[tokio::test]
    async fn test_lookup_skips_invalid_ids() {
        let fetcher = FixedFetcher { result: Ok(Some(bulbasaur())), calls: Cell::new(0) };
        lookup_detail(&fetcher, None).await;
        lookup_detail(&fetcher, Some("abc")).await;
        lookup_detail(&fetcher, Some("0")).await;
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1), "#00001");
        assert_eq!(format_number(10277), "#10277");
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label("special-attack"), "SATK");
        assert_eq!(stat_label("accuracy"), "accuracy");
    }

    #[test]
    fn test_stat_display() {
        assert_eq!(format_stat(45), "045");
        assert_eq!(stat_percent(255), 100);
        assert_eq!(stat_percent(300), 100);
        assert_eq!(stat_percent(0), 0);
    }

    #[test]
    fn test_neighbours_stop_at_bounds() {
        assert_eq!(previous_id(1), None);
        assert_eq!(previous_id(2), Some(1));
        assert_eq!(next_id(MAX_POKEMON_ID), None);
        assert_eq!(next_id(25), Some(26));
    }

    #[test]
    fn test_sprite_urls() {
        let urls = sprite_urls("https://sprites.example/pokemon/", 25);
        assert_eq!(urls.list, "https://sprites.example/pokemon/25.png");
        assert_eq!(urls.detail, "https://sprites.example/pokemon/other/official-artwork/25.png");
        assert_eq!(urls.dream_world, "https://sprites.example/pokemon/other/dream-world/25.svg");
    }
}
