//! Client Routes
//!
//! Path parsing for the four pages. Anything unrecognised falls back to
//! the GraphQL list.

use pokedex_core::detail::parse_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    GraphqlList,
    /// `/rest`
    RestList,
    /// `/favorites`
    Favorites,
    /// `/pokemon/:id`; a malformed id is kept verbatim so the page can report it
    Detail(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["rest"] => Route::RestList,
            ["favorites"] => Route::Favorites,
            ["pokemon", id] => Route::Detail(id.to_string()),
            _ => Route::GraphqlList,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::GraphqlList => "/".to_string(),
            Route::RestList => "/rest".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::Detail(id) => format!("/pokemon/{}", id),
        }
    }

    pub fn detail(id: u32) -> Self {
        Route::Detail(id.to_string())
    }

    /// Numeric id of a detail route, if well-formed
    pub fn detail_id(&self) -> Option<u32> {
        match self {
            Route::Detail(raw) => parse_id(Some(raw.as_str())),
            _ => None,
        }
    }

    /// Whether the path should be rewritten to the canonical form
    pub fn is_canonical(&self, path: &str) -> bool {
        self.path() == path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::GraphqlList);
        assert_eq!(Route::parse("/rest"), Route::RestList);
        assert_eq!(Route::parse("/favorites/"), Route::Favorites);
        assert_eq!(Route::parse("/pokemon/25"), Route::Detail("25".to_string()));
    }

    #[test]
    fn test_unknown_paths_fall_back_to_list() {
        assert_eq!(Route::parse("/nope"), Route::GraphqlList);
        assert_eq!(Route::parse("/pokemon"), Route::GraphqlList);
        assert_eq!(Route::parse("/pokemon/1/extra"), Route::GraphqlList);
        assert!(!Route::parse("/nope").is_canonical("/nope"));
    }

    #[test]
    fn test_detail_id() {
        assert_eq!(Route::parse("/pokemon/25").detail_id(), Some(25));
        assert_eq!(Route::parse("/pokemon/abc").detail_id(), None);
        assert_eq!(Route::detail(7).path(), "/pokemon/7");
    }
}
