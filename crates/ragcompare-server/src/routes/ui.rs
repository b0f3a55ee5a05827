//! Serves the embedded comparison page.

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

/// GET / — the single-page comparison UI.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
