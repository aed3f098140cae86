//! Search/Sort Filter
//!
//! Client-side query validation, substring filtering and sorting.
//! An invalid query is reported through `is_valid` but never blanks the
//! list: filtering is simply skipped.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{FavoriteEntry, ListItem, SortKey};

/// Minimum trimmed query length that activates filtering
pub const MIN_QUERY_LEN: usize = 3;

/// Anything that can be filtered by name and sorted by id
pub trait Named {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
}

impl Named for ListItem {
    fn id(&self) -> u32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for FavoriteEntry {
    fn id(&self) -> u32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<T> {
    pub items: Vec<T>,
    pub is_valid: bool,
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_ascii_digit() || c.is_whitespace() || c == '-'
}

/// Empty, or at least 3 characters drawn from ASCII letters, digits,
/// whitespace and hyphens (after trimming)
pub fn validate_query(query: &str) -> bool {
    let value = query.trim();
    if value.is_empty() {
        return true;
    }
    value.chars().count() >= MIN_QUERY_LEN && value.chars().all(is_allowed_char)
}

/// Lowercased with accents stripped, so "Flabébé" sorts beside "flabebe"
fn collation_key(name: &str) -> String {
    name.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

/// Accent- and case-insensitive comparison with a deterministic tie-break
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort by the given key
pub fn sort_items<T: Named>(items: &mut [T], sort_key: SortKey) {
    match sort_key {
        SortKey::Id => items.sort_by_key(|item| item.id()),
        SortKey::Name => items.sort_by(|a, b| compare_names(a.name(), b.name())),
    }
}

/// Filter `items` by `query` and sort the result. The input is untouched.
pub fn filter_items<T: Named + Clone>(items: &[T], query: &str, sort_key: SortKey) -> FilterOutcome<T> {
    let value = query.trim();
    let is_valid = validate_query(value);

    let mut filtered: Vec<T> = if is_valid && value.chars().count() >= MIN_QUERY_LEN {
        let needle = value.to_lowercase();
        items
            .iter()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    } else {
        items.to_vec()
    };

    sort_items(&mut filtered, sort_key);
    FilterOutcome { items: filtered, is_valid }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ListItem> {
        vec![
            ListItem::new(2, "ivysaur"),
            ListItem::new(1, "bulbasaur"),
            ListItem::new(5, "charmeleon"),
            ListItem::new(3, "venusaur"),
            ListItem::new(4, "charmander"),
        ]
    }

    fn names<T: Named>(items: &[T]) -> Vec<&str> {
        items.iter().map(|i| i.name()).collect()
    }

    #[test]
    fn test_validate_query() {
        assert!(validate_query(""));
        assert!(validate_query("   "));
        assert!(!validate_query("ab"));
        assert!(!validate_query("  ab  "));
        assert!(validate_query("bul"));
        assert!(validate_query("  bul  "));
        assert!(!validate_query("bulb@aur"));
        assert!(!validate_query("pika!"));
        assert!(validate_query("bulbasaur-123"));
        assert!(validate_query("mr mime"));
        assert!(!validate_query("pokémon"));
        assert!(!validate_query("ピカチュウ"));
    }

    #[test]
    fn test_non_ascii_query_does_not_filter() {
        let items = vec![ListItem::new(669, "flabébé"), ListItem::new(1, "bulbasaur")];
        let outcome = filter_items(&items, "flabébé", SortKey::Id);
        assert!(!outcome.is_valid);
        assert_eq!(names(&outcome.items), vec!["bulbasaur", "flabébé"]);
    }

    #[test]
    fn test_name_sort_ignores_accents() {
        let mut items = vec![
            ListItem::new(670, "floette"),
            ListItem::new(669, "Flabébé"),
            ListItem::new(1, "bulbasaur"),
        ];
        sort_items(&mut items, SortKey::Name);
        assert_eq!(names(&items), vec!["bulbasaur", "Flabébé", "floette"]);
        assert_eq!(compare_names("flabébé", "flabebf"), Ordering::Less);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let items = sample();

        let outcome = filter_items(&items, "char", SortKey::Name);
        assert!(outcome.is_valid);
        assert_eq!(names(&outcome.items), vec!["charmander", "charmeleon"]);

        let outcome = filter_items(&items, "BULB", SortKey::Name);
        assert_eq!(names(&outcome.items), vec!["bulbasaur"]);

        // Substring, not prefix
        let outcome = filter_items(&items, "saur", SortKey::Id);
        assert_eq!(names(&outcome.items), vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let outcome = filter_items(&sample(), "  char  ", SortKey::Name);
        assert!(outcome.is_valid);
        assert_eq!(outcome.items.len(), 2);
    }

    #[test]
    fn test_invalid_query_skips_filtering() {
        let items = sample();

        let outcome = filter_items(&items, "ch", SortKey::Id);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.items.len(), 5);

        let outcome = filter_items(&items, "char@", SortKey::Id);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.items.len(), 5);
    }

    #[test]
    fn test_sort_by_id_and_name() {
        let items = sample();

        let by_id = filter_items(&items, "", SortKey::Id);
        let ids: Vec<u32> = by_id.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let by_name = filter_items(&items, "", SortKey::Name);
        assert_eq!(
            names(&by_name.items),
            vec!["bulbasaur", "charmander", "charmeleon", "ivysaur", "venusaur"]
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = sample();
        let before = items.clone();
        let _ = filter_items(&items, "", SortKey::Name);
        assert_eq!(items, before);
    }

    #[test]
    fn test_name_sort_is_stable_and_case_insensitive() {
        let mut items = vec![
            ListItem::new(3, "Zubat"),
            ListItem::new(1, "abra"),
            ListItem::new(2, "Abra"),
            ListItem::new(4, "abra"),
        ];
        sort_items(&mut items, SortKey::Name);
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_filters_favorites_too() {
        let favorites = vec![FavoriteEntry::new(7, "squirtle"), FavoriteEntry::new(4, "charmander")];
        let outcome = filter_items(&favorites, "squ", SortKey::Name);
        assert_eq!(outcome.items, vec![FavoriteEntry::new(7, "squirtle")]);
    }
}
