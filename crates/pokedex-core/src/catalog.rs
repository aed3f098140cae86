//! Type Catalog
//!
//! Options for the type selector, always led by "all types".

use async_trait::async_trait;

use crate::error::FetchResult;

/// Type filter value meaning "no type restriction"
pub const ALL_TYPES: &str = "all";

#[async_trait(?Send)]
pub trait TypeFetcher {
    async fn fetch_types(&self) -> FetchResult<Vec<String>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOption {
    pub label: String,
    pub value: String,
}

pub fn type_options(types: &[String]) -> Vec<TypeOption> {
    let mut options = Vec::with_capacity(types.len() + 1);
    options.push(TypeOption {
        label: "All types".to_string(),
        value: ALL_TYPES.to_string(),
    });
    options.extend(types.iter().map(|name| TypeOption {
        label: name.clone(),
        value: name.clone(),
    }));
    options
}
