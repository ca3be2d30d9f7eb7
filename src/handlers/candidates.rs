//! Candidate pool handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::candidates::{CandidateRepository, RegisterCandidateRequest, SwapCandidate};
use crate::error::ApiError;
use crate::models::ApiResponse;

/// POST /api/candidates - register a new swap candidate (stored as pending)
pub async fn register_candidate(
    State(repo): State<Arc<dyn CandidateRepository>>,
    Json(request): Json<RegisterCandidateRequest>,
) -> Result<Json<ApiResponse<SwapCandidate>>, ApiError> {
    request.validate().map_err(ApiError::ValidationError)?;

    let candidate = SwapCandidate::from(request);
    repo.insert(candidate.clone()).await;

    tracing::info!(candidate_id = %candidate.id, "Candidate registered");

    Ok(Json(ApiResponse::ok(candidate)))
}

/// GET /api/candidates - list all registered candidates
pub async fn list_candidates(
    State(repo): State<Arc<dyn CandidateRepository>>,
) -> Json<ApiResponse<Vec<SwapCandidate>>> {
    Json(ApiResponse::ok(repo.list().await))
}
