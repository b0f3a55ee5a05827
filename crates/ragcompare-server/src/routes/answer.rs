//! Answer routes — one endpoint per panel.
//!
//! The comparison page fires both requests independently, so a failure from
//! one endpoint never affects the other panel.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use crate::state::AppState;
use ragcompare_chat::{AnswerRequest, Completion};

type ApiResult = (StatusCode, Json<serde_json::Value>);

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/answer/plain", post(answer_plain))
        .route("/answer/grounded", post(answer_grounded))
}

/// POST /api/answer/plain — completion without retrieval.
async fn answer_plain(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnswerRequest>,
) -> ApiResult {
    let query = req.query.trim().to_string();
    if query.is_empty() {
        return blank_query();
    }

    let start = Instant::now();
    match state.completions.complete(&query).await {
        Ok(completion) => answered(completion, false, start),
        Err(e) => upstream_error(e),
    }
}

/// POST /api/answer/grounded — completion grounded by Azure AI Search.
async fn answer_grounded(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnswerRequest>,
) -> ApiResult {
    let query = req.query.trim().to_string();
    if query.is_empty() {
        return blank_query();
    }

    let start = Instant::now();
    match state
        .completions
        .complete_grounded(&query, &state.config.search)
        .await
    {
        Ok(completion) => answered(completion, true, start),
        Err(e) => upstream_error(e),
    }
}

fn answered(completion: Completion, grounded: bool, start: Instant) -> ApiResult {
    let duration = start.elapsed().as_millis() as u64;
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "answer": completion.text,
            "model": completion.model,
            "grounded": grounded,
            "duration": duration,
        })),
    )
}

fn blank_query() -> ApiResult {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": "Query must not be blank" })),
    )
}

fn upstream_error(e: ragcompare_core::Error) -> ApiResult {
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
}
