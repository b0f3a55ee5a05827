//! Status route — reports what is configured without exposing keys.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /api/status
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let openai = &state.config.openai;
    let search = &state.config.search;

    Json(serde_json::json!({
        "deployment": openai.deployment,
        "apiVersion": openai.api_version,
        "indexName": search.index_name,
        "openaiEndpointConfigured": !openai.endpoint.is_empty(),
        "searchEndpointConfigured": !search.endpoint.is_empty(),
    }))
}
