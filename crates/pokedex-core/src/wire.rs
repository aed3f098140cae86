//! Wire Formats
//!
//! GraphQL documents and variables, plus decoding of the GraphQL and REST
//! response bodies into domain types.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::detail::{PokemonDetail, PokemonStat};
use crate::error::{FetchError, FetchResult};
use crate::models::ListItem;
use crate::pagination::{ListPage, PageRequest, RestPage};

// ========================
// GraphQL Documents
// ========================

pub const POKEMON_LIST_QUERY: &str = r#"query PokemonListWithCount(
  $limit: Int!
  $offset: Int!
  $orderBy: [pokemon_order_by!]
  $where: pokemon_bool_exp = {}
) {
  pokemon(limit: $limit, offset: $offset, order_by: $orderBy, where: $where) {
    id
    name
  }
  pokemon_aggregate(where: $where) {
    aggregate {
      count
    }
  }
}"#;

pub const POKEMON_DETAIL_QUERY: &str = r#"query GetPokemonDetail($id: Int!) {
  pokemon(where: { id: { _eq: $id } }, limit: 1) {
    id
    name
    height
    weight
    pokemontypes {
      type {
        name
      }
    }
    pokemonmoves(order_by: { move: { id: desc } }, limit: 2) {
      move {
        name
      }
    }
    pokemonstats {
      base_stat
      stat {
        name
      }
    }
    pokemonspecy {
      pokemonspeciesflavortexts(where: { language: { name: { _eq: "en" } } }, limit: 2) {
        flavor_text
      }
    }
  }
}"#;

pub const POKEMON_TYPES_QUERY: &str = r#"query Types {
  type {
    id
    name
  }
}"#;

/// POST body of a GraphQL request
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

/// `where` clause for a list request; keys are ANDed by the backend
pub fn where_clause(request: &PageRequest) -> Value {
    let mut clause = Map::new();
    if let Some(search) = &request.search {
        clause.insert("name".to_string(), json!({ "_ilike": format!("%{}%", search) }));
    }
    if let Some(type_name) = &request.type_filter {
        clause.insert(
            "pokemontypes".to_string(),
            json!({ "type": { "name": { "_eq": type_name } } }),
        );
    }
    Value::Object(clause)
}

pub fn list_variables(request: &PageRequest) -> Value {
    let mut order = Map::new();
    order.insert(request.sort_key.as_str().to_string(), json!("asc"));
    json!({
        "limit": request.limit,
        "offset": request.offset,
        "orderBy": [Value::Object(order)],
        "where": where_clause(request),
    })
}

pub fn detail_variables(id: u32) -> Value {
    json!({ "id": id })
}

// ========================
// GraphQL Responses
// ========================

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

/// Decode a GraphQL body, turning a non-empty `errors` array into an error
pub fn decode_graphql<T: DeserializeOwned>(body: &str) -> FetchResult<T> {
    let response: GraphqlResponse<T> = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(FetchError::Graphql(messages.join("; ")));
    }
    response
        .data
        .ok_or_else(|| FetchError::Decode("response has no data".to_string()))
}

#[derive(Deserialize)]
struct ListData {
    pokemon: Vec<ListItem>,
    pokemon_aggregate: AggregateWrapper,
}

#[derive(Deserialize)]
struct AggregateWrapper {
    aggregate: Aggregate,
}

#[derive(Deserialize)]
struct Aggregate {
    count: u32,
}

pub fn decode_list_page(body: &str) -> FetchResult<ListPage> {
    let data: ListData = decode_graphql(body)?;
    Ok(ListPage {
        items: data.pokemon,
        total_count: data.pokemon_aggregate.aggregate.count,
    })
}

#[derive(Deserialize)]
struct DetailData {
    pokemon: Vec<RawPokemon>,
}

#[derive(Deserialize)]
struct RawPokemon {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    pokemontypes: Vec<RawTypeRelation>,
    #[serde(default)]
    pokemonmoves: Vec<RawMove>,
    #[serde(default)]
    pokemonstats: Vec<RawStat>,
    pokemonspecy: Option<RawSpecy>,
}

#[derive(Deserialize)]
struct Named {
    name: String,
}

#[derive(Deserialize)]
struct RawTypeRelation {
    #[serde(rename = "type")]
    type_: Named,
}

#[derive(Deserialize)]
struct RawMove {
    #[serde(rename = "move")]
    move_: Named,
}

#[derive(Deserialize)]
struct RawStat {
    base_stat: u32,
    stat: Named,
}

#[derive(Deserialize)]
struct RawSpecy {
    #[serde(default)]
    pokemonspeciesflavortexts: Vec<RawFlavorText>,
}

#[derive(Deserialize)]
struct RawFlavorText {
    flavor_text: String,
}

/// Flavor texts carry hard line breaks and form feeds from the games
fn clean_flavor_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode a detail lookup; zero rows is `Ok(None)`
pub fn decode_detail(body: &str) -> FetchResult<Option<PokemonDetail>> {
    let data: DetailData = decode_graphql(body)?;
    let Some(raw) = data.pokemon.into_iter().next() else {
        return Ok(None);
    };

    let description = raw
        .pokemonspecy
        .and_then(|s| s.pokemonspeciesflavortexts.into_iter().next())
        .map(|t| clean_flavor_text(&t.flavor_text))
        .unwrap_or_default();

    Ok(Some(PokemonDetail {
        id: raw.id,
        name: raw.name,
        height: raw.height,
        weight: raw.weight,
        types: raw.pokemontypes.into_iter().map(|t| t.type_.name).collect(),
        moves: raw.pokemonmoves.into_iter().map(|m| m.move_.name).collect(),
        stats: raw
            .pokemonstats
            .into_iter()
            .map(|s| PokemonStat {
                name: s.stat.name,
                base_stat: s.base_stat,
            })
            .collect(),
        description,
    }))
}

#[derive(Deserialize)]
struct TypesData {
    #[serde(rename = "type")]
    types: Vec<Named>,
}

pub fn decode_types(body: &str) -> FetchResult<Vec<String>> {
    let data: TypesData = decode_graphql(body)?;
    Ok(data.types.into_iter().map(|t| t.name).collect())
}

// ========================
// REST
// ========================

#[derive(Deserialize)]
struct RestListResponse {
    count: u32,
    next: Option<String>,
    results: Vec<RestResult>,
}

#[derive(Deserialize)]
struct RestResult {
    name: String,
    url: String,
}

/// First-page URL of the REST collection
pub fn rest_list_url(base: &str, limit: u32, offset: u32) -> String {
    format!("{}/pokemon?limit={}&offset={}", base.trim_end_matches('/'), limit, offset)
}

/// Id encoded as the last non-empty path segment of a resource URL
pub fn id_from_url(url: &str) -> Option<u32> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .last()?
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
}

pub fn decode_rest_page(body: &str) -> FetchResult<RestPage> {
    let response: RestListResponse = serde_json::from_str(body)?;
    let items = response
        .results
        .into_iter()
        .filter_map(|result| match id_from_url(&result.url) {
            Some(id) => Some(ListItem::new(id, result.name)),
            None => {
                warn!("[REST] Dropping result with unparsable url: {}", result.url);
                None
            }
        })
        .collect();

    Ok(RestPage {
        count: response.count,
        next: response.next,
        items,
    })
}

/// Human-readable message for a failed response body
pub fn error_message(body: &str, status: u16) -> String {
    #[derive(Deserialize)]
    struct Message {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<Message>(body) {
        return parsed.message;
    }
    let text = body.trim();
    if text.is_empty() {
        format!("HTTP {}", status)
    } else {
        text.to_string()
    }
}
