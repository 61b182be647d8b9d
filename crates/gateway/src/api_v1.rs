//! HTTP API v1.
//!
//! Endpoints:
//!
//! - `POST /v1/compose`: Build an email for a free-text request
//! - `POST /v1/rank`: Show how every template scores against a request

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use mailweave_core::variables::VariableMap;
use mailweave_engine::rank;

use crate::SharedState;

/// Largest `top_k` a client may ask for.
const MAX_TOP_K: usize = 10;

pub fn v1_router(state: SharedState) -> Router {
    Router::new()
        .route("/compose", post(compose_handler))
        .route("/rank", post(rank_handler))
        .with_state(state)
}

// ── DTOs ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ComposeRequest {
    /// What the email should be about.
    pub request: String,
    /// Recipient; fills `{name}`.
    #[serde(default)]
    pub name: Option<String>,
    /// Placeholder values that win over every default.
    #[serde(default)]
    pub variables: VariableMap,
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComposeResponse {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankRequest {
    pub request: String,
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankedTemplateDto {
    pub index: usize,
    pub score: usize,
    pub greeting: String,
    pub closing: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankResponse {
    pub request_tokens: Vec<String>,
    pub templates: usize,
    pub ranking: Vec<RankedTemplateDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn unprocessable(message: impl Into<String>) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn validate(request: &str, top_k: Option<usize>) -> Result<(), ApiError> {
    if request.trim().is_empty() {
        return Err(unprocessable("'request' must not be empty"));
    }
    if let Some(k) = top_k
        && !(1..=MAX_TOP_K).contains(&k)
    {
        return Err(unprocessable(format!(
            "'top_k' must be between 1 and {MAX_TOP_K}, got {k}"
        )));
    }
    Ok(())
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn compose_handler(
    State(state): State<SharedState>,
    Json(req): Json<ComposeRequest>,
) -> Result<Json<ComposeResponse>, ApiError> {
    validate(&req.request, req.top_k)?;

    let composer = match req.top_k {
        Some(k) => state.composer.with_top_k(k),
        None => state.composer,
    };
    let vars = state
        .variables
        .build_now(req.name.as_deref(), &req.variables);

    let email = composer
        .compose_from_source(state.source.as_ref(), &req.request, &vars)
        .await;

    let id = uuid::Uuid::new_v4().to_string();
    info!(
        id = %id,
        request_len = req.request.len(),
        email_len = email.len(),
        "Compose request served"
    );

    Ok(Json(ComposeResponse { id, email }))
}

async fn rank_handler(
    State(state): State<SharedState>,
    Json(req): Json<RankRequest>,
) -> Result<Json<RankResponse>, ApiError> {
    validate(&req.request, req.top_k)?;

    let corpus = state
        .composer
        .load_corpus(state.source.as_ref())
        .await
        .map_err(|e| {
            warn!(error = %e, "Corpus unavailable for ranking");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: format!("Corpus unavailable: {e}"),
                }),
            )
        })?;

    let ranking = rank(&corpus, &req.request);
    let limit = req.top_k.unwrap_or(ranking.entries.len());

    Ok(Json(RankResponse {
        templates: corpus.len(),
        ranking: ranking
            .entries
            .iter()
            .take(limit)
            .map(|entry| RankedTemplateDto {
                index: entry.index,
                score: entry.score,
                greeting: entry.template.greeting.clone(),
                closing: entry.template.closing.clone(),
            })
            .collect(),
        request_tokens: ranking.request_tokens,
    }))
}
