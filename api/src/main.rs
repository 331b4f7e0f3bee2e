use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use concord::{default_data_dir, or_na, AppState, ConcordError, LexiconEntry, Passage};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

// === Request/Response types ===

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

#[derive(Deserialize)]
struct PassageParams {
    r: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    greek_entries: usize,
    hebrew_entries: usize,
    cached_verses: usize,
}

/// One lexicon entry with render-time defaults applied and the related
/// keys pulled out of the derivation.
#[derive(Serialize)]
struct EntryResponse {
    key: String,
    language: String,
    lemma: String,
    translit: String,
    strongs_def: String,
    kjv_def: String,
    derivation: String,
    related: Vec<String>,
}

impl From<&LexiconEntry> for EntryResponse {
    fn from(entry: &LexiconEntry) -> Self {
        Self {
            key: entry.key.clone(),
            language: entry.language.to_string(),
            lemma: or_na(entry.lemma.as_deref()).to_string(),
            translit: or_na(entry.translit.as_deref()).to_string(),
            strongs_def: or_na(entry.strongs_def.as_deref()).to_string(),
            kjv_def: or_na(entry.kjv_def.as_deref()).to_string(),
            derivation: or_na(entry.derivation.as_deref()).to_string(),
            related: entry.related_keys(),
        }
    }
}

#[derive(Serialize)]
struct SearchResponse {
    query: String,
    total_hits: usize,
    results: Vec<EntryResponse>,
    elapsed_ms: u64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (cached_verses, _) = state.verses.stats();
    Json(HealthResponse {
        status: "ok".to_string(),
        greek_entries: state.store.greek().len(),
        hebrew_entries: state.store.hebrew().len(),
        cached_verses,
    })
}

async fn lookup(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<EntryResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .lookup_entry(&key)
        .map(|entry| Json(EntryResponse::from(entry)))
        .ok_or_else(|| {
            let err =
                ConcordError::NotFound(format!("Strong's key {key} (keys look like G26 or H7225)"));
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
        })
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let results: Vec<EntryResponse> = state
        .search(&params.q)
        .into_iter()
        .map(EntryResponse::from)
        .collect();

    Json(SearchResponse {
        query: params.q,
        total_hits: results.len(),
        results,
        elapsed_ms: start.elapsed().as_millis() as u64,
    })
}

async fn passage(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PassageParams>,
) -> Result<Json<Passage>, (StatusCode, Json<ErrorResponse>)> {
    state.passage(&params.r).map(Json).map_err(|e| {
        let status = match &e {
            ConcordError::Format(_) => StatusCode::BAD_REQUEST,
            ConcordError::UnknownBook(_) | ConcordError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { error: e.to_string() }))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let data_dir = default_data_dir();
    tracing::info!("Using data directory {}", data_dir.display());
    let state = Arc::new(AppState::new(data_dir)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/lexicon/:key", get(lookup))
        .route("/search", get(search))
        .route("/passage", get(passage))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("Listening on http://127.0.0.1:3000");
    axum::serve(listener, app).await?;

    Ok(())
}
