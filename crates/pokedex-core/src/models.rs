//! Domain Models
//!
//! Data structures shared by the list, favorites and detail views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog entry as rendered in list views
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub name: String,
}

impl ListItem {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Favorite as persisted in local storage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: u32,
    pub name: String,
}

impl FavoriteEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl From<ListItem> for FavoriteEntry {
    fn from(item: ListItem) -> Self {
        Self { id: item.id, name: item.name }
    }
}

impl From<&FavoriteEntry> for ListItem {
    fn from(entry: &FavoriteEntry) -> Self {
        Self { id: entry.id, name: entry.name.clone() }
    }
}

/// Sort order for list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Id,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Id => "id",
        }
    }

    /// Parse a sort key, falling back to `Name` for missing or unknown values
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("id") => SortKey::Id,
            _ => SortKey::Name,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_fallback() {
        assert_eq!(SortKey::parse_or_default(Some("id")), SortKey::Id);
        assert_eq!(SortKey::parse_or_default(Some("name")), SortKey::Name);
        assert_eq!(SortKey::parse_or_default(Some("weight")), SortKey::Name);
        assert_eq!(SortKey::parse_or_default(None), SortKey::Name);
    }

    #[test]
    fn test_favorite_json_shape() {
        let entry = FavoriteEntry::new(25, "pikachu");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"id":25,"name":"pikachu"}"#);

        // Extra fields written by older builds are ignored
        let parsed: FavoriteEntry =
            serde_json::from_str(r#"{"id":1,"name":"bulbasaur","order":1}"#).unwrap();
        assert_eq!(parsed, FavoriteEntry::new(1, "bulbasaur"));
    }
}
