//! Axum route handlers for the ATS scan API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ats::models::AnalysisResult;
use crate::ats::scanner::{catalog, CheckSummary, WORST_CASE_PENALTY};
use crate::errors::AppError;
use crate::models::resume::ResumeSnapshot;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BatchScanRequest {
    pub resumes: Vec<ResumeSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct BatchScanResponse {
    pub results: Vec<AnalysisResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub checks: Vec<CheckSummary>,
    pub max_penalty: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/scan
///
/// Scores one resume snapshot. Missing or null fields are penalties, not errors.
pub async fn handle_scan(
    State(state): State<AppState>,
    payload: Result<Json<ResumeSnapshot>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(resume) = payload?;

    let result = state.analyzer.analyze(&resume);
    debug!(
        backend = state.analyzer.backend(),
        score = result.score,
        failed = result.failed_count(),
        "Scanned resume"
    );

    Ok(Json(result))
}

/// POST /api/v1/ats/scan/batch
///
/// Scores several snapshots (dashboard view). Results keep request order.
pub async fn handle_scan_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchScanRequest>, JsonRejection>,
) -> Result<Json<BatchScanResponse>, AppError> {
    let Json(request) = payload?;

    if request.resumes.is_empty() {
        return Err(AppError::Validation("resumes cannot be empty".to_string()));
    }
    let limit = state.config.max_batch_size;
    if request.resumes.len() > limit {
        return Err(AppError::Validation(format!(
            "batch of {} exceeds the limit of {limit} resumes",
            request.resumes.len()
        )));
    }

    let results: Vec<AnalysisResult> = request
        .resumes
        .iter()
        .map(|resume| state.analyzer.analyze(resume))
        .collect();

    info!(
        backend = state.analyzer.backend(),
        count = results.len(),
        "Scanned resume batch"
    );

    Ok(Json(BatchScanResponse { results }))
}

/// GET /api/v1/ats/checks
///
/// Lists every rule with its impact and penalty, in evaluation order.
pub async fn handle_list_checks() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        checks: catalog(),
        max_penalty: WORST_CASE_PENALTY,
    })
}
