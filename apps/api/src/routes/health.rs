use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::ats::scanner::catalog;
use crate::state::AppState;

/// GET /health
/// Reports service version plus the active analyzer and its rule count.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "analyzer": state.analyzer.backend(),
        "checks": catalog().len(),
        "maxBatchSize": state.config.max_batch_size
    }))
}
