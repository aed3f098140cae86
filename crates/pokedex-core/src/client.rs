//! HTTP Clients
//!
//! `reqwest`-backed fetchers for the GraphQL backend and the REST API.
//! On wasm32 reqwest drives the browser `fetch`, and dropping a request
//! future aborts it.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::catalog::TypeFetcher;
use crate::detail::{DetailFetcher, PokemonDetail};
use crate::error::{FetchError, FetchResult};
use crate::pagination::{GraphqlPageFetcher, ListPage, PageRequest, RestPage, RestPageFetcher};
use crate::wire::{self, GraphqlRequest};

/// Read a response body, mapping non-2xx statuses to `FetchError::Status`
async fn read_body(response: reqwest::Response) -> FetchResult<String> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            message: wire::error_message(&body, status.as_u16()),
        });
    }
    Ok(body)
}

#[derive(Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn execute(&self, query: &str, variables: Value) -> FetchResult<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;
        read_body(response).await
    }
}

#[async_trait(?Send)]
impl GraphqlPageFetcher for GraphqlClient {
    async fn fetch_page(&self, request: &PageRequest) -> FetchResult<ListPage> {
        let body = self
            .execute(wire::POKEMON_LIST_QUERY, wire::list_variables(request))
            .await?;
        let page = wire::decode_list_page(&body)?;
        debug!("[GRAPHQL] Got {} of {} items", page.items.len(), page.total_count);
        Ok(page)
    }
}

#[async_trait(?Send)]
impl DetailFetcher for GraphqlClient {
    async fn fetch_detail(&self, id: u32) -> FetchResult<Option<PokemonDetail>> {
        let body = self
            .execute(wire::POKEMON_DETAIL_QUERY, wire::detail_variables(id))
            .await?;
        wire::decode_detail(&body)
    }
}

#[async_trait(?Send)]
impl TypeFetcher for GraphqlClient {
    async fn fetch_types(&self) -> FetchResult<Vec<String>> {
        let body = self
            .execute(wire::POKEMON_TYPES_QUERY, Value::Object(Default::default()))
            .await?;
        wire::decode_types(&body)
    }
}

#[derive(Clone, Default)]
pub struct RestClient {
    http: reqwest::Client,
}

impl RestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl RestPageFetcher for RestClient {
    async fn fetch_url(&self, url: &str) -> FetchResult<RestPage> {
        let response = self.http.get(url).send().await?;
        let body = read_body(response).await?;
        wire::decode_rest_page(&body)
    }
}
