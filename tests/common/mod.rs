//! Stub PokeAPI server shared by the integration tests.
//!
//! Serves a handful of fixtures on an ephemeral port and counts how many
//! requests reached it per path and query.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;

pub const AREAS: [&str; 5] = [
    "canalave-city-area",
    "eterna-city-area",
    "pastoria-city-area",
    "sunyshore-city-area",
    "sinnoh-pokemon-league-area",
];

const PAGE_SIZE: usize = 2;

#[derive(Clone)]
struct StubState {
    base_url: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl StubState {
    fn record(&self, uri: &Uri) {
        let key = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default();
        *self.hits.lock().entry(key).or_insert(0) += 1;
    }
}

/// Handle to a running stub.
pub struct StubApi {
    pub base_url: String,
    state: StubState,
}

impl StubApi {
    /// Requests received for `path_and_query`, e.g. `/api/v2/pokemon/pikachu`.
    pub fn hits(&self, path_and_query: &str) -> usize {
        self.state.hits.lock().get(path_and_query).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.state.hits.lock().values().sum()
    }
}

pub async fn spawn_stub() -> StubApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = StubState {
        base_url: format!("http://{addr}/api/v2"),
        hits: Arc::default(),
    };

    let app = Router::new()
        .route("/api/v2/location-area", get(location_area_page))
        .route("/api/v2/location-area/:name", get(location_area))
        .route("/api/v2/pokemon/:name", get(pokemon))
        .with_state(state.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubApi {
        base_url: state.base_url.clone(),
        state,
    }
}

#[derive(Deserialize)]
struct PageQuery {
    offset: Option<usize>,
    limit: Option<usize>,
}

async fn location_area_page(
    State(state): State<StubState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Json<serde_json::Value> {
    state.record(&uri);

    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(PAGE_SIZE);
    let page_url =
        |offset: usize| format!("{}/location-area?offset={offset}&limit={limit}", state.base_url);

    let results: Vec<_> = AREAS
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(i, name)| {
            json!({"name": name, "url": format!("{}/location-area/{}/", state.base_url, i + 1)})
        })
        .collect();
    let next = (offset + limit < AREAS.len()).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn location_area(
    State(state): State<StubState>,
    uri: Uri,
    Path(name): Path<String>,
) -> Response {
    state.record(&uri);

    let Some(id) = AREAS.iter().position(|area| *area == name) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    let encounters: &[&str] = if name == "canalave-city-area" {
        &["tentacool", "tentacruel", "pidgey"][..]
    } else {
        &["pidgey"][..]
    };
    let encounters: Vec<_> = encounters
        .iter()
        .map(|p| json!({"pokemon": {"name": p, "url": ""}, "version_details": []}))
        .collect();

    Json(json!({
        "id": id + 1,
        "name": name,
        "game_index": id + 1,
        "pokemon_encounters": encounters,
    }))
    .into_response()
}

async fn pokemon(State(state): State<StubState>, uri: Uri, Path(name): Path<String>) -> Response {
    state.record(&uri);

    let (id, base_experience, height, weight, types): (u32, u32, u32, u32, &[&str]) =
        match name.as_str() {
            "pidgey" => (16, 50, 3, 18, &["normal", "flying"][..]),
            "pikachu" => (25, 112, 4, 60, &["electric"][..]),
            "tentacool" => (72, 67, 9, 455, &["water", "poison"][..]),
            "mewtwo" => (150, 340, 20, 1220, &["psychic"][..]),
            _ => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
        };

    let types: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": ""}}))
        .collect();
    let stats: Vec<_> = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"]
        .iter()
        .enumerate()
        .map(|(i, s)| json!({"base_stat": 40 + i * 5, "effort": 0, "stat": {"name": s, "url": ""}}))
        .collect();

    Json(json!({
        "id": id,
        "name": name,
        "base_experience": base_experience,
        "height": height,
        "weight": weight,
        "stats": stats,
        "types": types,
    }))
    .into_response()
}
