//! sous-chef REST server.
//!
//! - `GET  /api/health` — service status
//! - `POST /api/chat` — one chat turn ({"session_id", "message"})
//! - `GET  /api/recipes` — list all recipes (summaries)
//! - `GET  /api/recipes/{id}` — full recipe detail
//! - `GET  /api/recipes/search` — filtered search (q, cuisine, difficulty, dietary, max_time)
//! - `GET  /api/techniques` — list cooking techniques
//! - `GET  /api/cuisines` — list known cuisines
//! - `GET  /api/dietary-tags` — list known dietary tags
//! - `POST /api/convert` — unit conversion ({"amount", "from_unit", "to_unit"})
//! - `POST /api/session/reset` — drop a session's state
//!
//! Validation failures (unknown enum values, incompatible units, bad
//! servings) map to 400; a missing recipe id maps to 404.
//!
//! Build and run: `cargo run --features server --bin sous-chef-server`

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use sous_chef::catalog::{Cuisine, DietaryTag, Difficulty, Recipe, SearchFilter};
use sous_chef::convert;
use sous_chef::render;
use sous_chef::resolve::Reply;
use sous_chef::Assistant;

// ── Server state ──────────────────────────────────────────────────────────

struct ServerState {
    assistant: Assistant,
}

type AppError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> AppError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn not_found(message: impl Into<String>) -> AppError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ── Request / response types ──────────────────────────────────────────────

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default = "default_session")]
    session_id: String,
    #[serde(default)]
    message: String,
}

fn default_session() -> String {
    "default".to_string()
}

#[derive(Serialize)]
struct ChatResponse {
    session_id: String,
    intent: String,
    reply: Reply,
    rendered: String,
}

#[derive(Serialize)]
struct RecipeSummaryResponse {
    id: String,
    name: String,
    cuisine: Cuisine,
    difficulty: Difficulty,
    prep_time: u32,
    cook_time: u32,
    servings: u32,
    dietary_tags: Vec<DietaryTag>,
}

impl From<&Recipe> for RecipeSummaryResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            cuisine: recipe.cuisine,
            difficulty: recipe.difficulty,
            prep_time: recipe.prep_time_min,
            cook_time: recipe.cook_time_min,
            servings: recipe.servings,
            dietary_tags: recipe.dietary_tags.clone(),
        }
    }
}

#[derive(Serialize)]
struct RecipeListResponse {
    recipes: Vec<RecipeSummaryResponse>,
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    cuisine: Option<String>,
    difficulty: Option<String>,
    /// Comma-separated dietary tags, all required.
    dietary: Option<String>,
    max_time: Option<u32>,
}

#[derive(Serialize)]
struct SearchResultRow {
    id: String,
    name: String,
    cuisine: Cuisine,
    difficulty: Difficulty,
    total_time: u32,
    servings: u32,
    dietary_tags: Vec<DietaryTag>,
}

#[derive(Serialize)]
struct SearchResponse {
    results: Vec<SearchResultRow>,
    count: usize,
}

#[derive(Deserialize)]
struct ConvertRequest {
    amount: f64,
    from_unit: String,
    to_unit: String,
}

#[derive(Serialize)]
struct ConvertSide {
    amount: f64,
    unit: String,
}

#[derive(Serialize)]
struct ConvertResponse {
    original: ConvertSide,
    converted: ConvertSide,
    #[serde(rename = "type")]
    kind: convert::ConversionKind,
}

#[derive(Deserialize)]
struct SessionResetRequest {
    #[serde(default = "default_session")]
    session_id: String,
}

#[derive(Serialize)]
struct SessionResetResponse {
    status: String,
    session_id: String,
    existed: bool,
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "sous-chef".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn chat(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(bad_request("Message is required"));
    }

    let intent = sous_chef::classify::classify(&request.message);
    let reply = state
        .assistant
        .answer(&request.session_id, &request.message)
        .map_err(|e| bad_request(e.to_string()))?;

    let rendered = render::render(&reply);
    Ok(Json(ChatResponse {
        session_id: request.session_id,
        intent: intent.to_string(),
        reply,
        rendered,
    }))
}

async fn list_recipes(State(state): State<Arc<ServerState>>) -> Json<RecipeListResponse> {
    Json(RecipeListResponse {
        recipes: state.assistant.catalog().recipes().map(Into::into).collect(),
    })
}

async fn get_recipe(
    State(state): State<Arc<ServerState>>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    state
        .assistant
        .catalog()
        .recipe(&recipe_id)
        .map(|recipe| Json(recipe.clone()))
        .ok_or_else(|| not_found("Recipe not found"))
}

async fn search(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let cuisine = params
        .cuisine
        .as_deref()
        .map(Cuisine::from_str)
        .transpose()
        .map_err(|e| bad_request(e.to_string()))?;
    let difficulty = params
        .difficulty
        .as_deref()
        .map(Difficulty::from_str)
        .transpose()
        .map_err(|e| bad_request(e.to_string()))?;
    let dietary_tags = match params.dietary.as_deref() {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(DietaryTag::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| bad_request(e.to_string()))?,
        None => Vec::new(),
    };

    let filter = SearchFilter {
        query: Some(params.q),
        cuisine,
        difficulty,
        dietary_tags,
        max_time_min: params.max_time,
    };

    let results: Vec<SearchResultRow> = state
        .assistant
        .catalog()
        .search(&filter)
        .into_iter()
        .map(|recipe| SearchResultRow {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            cuisine: recipe.cuisine,
            difficulty: recipe.difficulty,
            total_time: recipe.total_time_min(),
            servings: recipe.servings,
            dietary_tags: recipe.dietary_tags.clone(),
        })
        .collect();

    let count = results.len();
    Ok(Json(SearchResponse { results, count }))
}

async fn list_techniques(State(state): State<Arc<ServerState>>) -> Json<serde_json::Value> {
    let techniques: Vec<_> = state.assistant.catalog().techniques().collect();
    Json(serde_json::json!({ "techniques": techniques }))
}

async fn list_cuisines(State(state): State<Arc<ServerState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "cuisines": state.assistant.catalog().cuisines() }))
}

async fn list_dietary_tags(State(state): State<Arc<ServerState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "dietary_tags": state.assistant.catalog().dietary_tags() }))
}

async fn convert_units(
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, AppError> {
    let conversion = convert::convert(request.amount, &request.from_unit, &request.to_unit)
        .map_err(|e| bad_request(e.to_string()))?;

    Ok(Json(ConvertResponse {
        original: ConvertSide {
            amount: conversion.amount,
            unit: conversion.from_unit,
        },
        converted: ConvertSide {
            amount: conversion.result,
            unit: conversion.to_unit,
        },
        kind: conversion.kind,
    }))
}

async fn reset_session(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SessionResetRequest>,
) -> Json<SessionResetResponse> {
    let existed = state.assistant.reset_session(&request.session_id);
    Json(SessionResetResponse {
        status: "reset".to_string(),
        session_id: request.session_id,
        existed,
    })
}

// ── Main ──────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bind = std::env::var("CHEF_SERVER_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("CHEF_SERVER_PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{bind}:{port}");

    let state = Arc::new(ServerState {
        assistant: Assistant::new(),
    });

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/chat", post(chat))
        .route("/api/recipes", get(list_recipes))
        .route("/api/recipes/search", get(search))
        .route("/api/recipes/{recipe_id}", get(get_recipe))
        .route("/api/techniques", get(list_techniques))
        .route("/api/cuisines", get(list_cuisines))
        .route("/api/dietary-tags", get(list_dietary_tags))
        .route("/api/convert", post(convert_units))
        .route("/api/session/reset", post(reset_session))
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("sous-chef server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
