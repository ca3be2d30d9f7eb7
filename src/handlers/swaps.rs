//! Active swap coordination handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{ApiResponse, Coordinate};
use crate::swaps::{
    AcceptMatchRequest, ActiveSwap, SendMessageRequest, SwapCoordinator, SwapMessage,
    SwapVerificationResult, VerifyRequest,
};

/// POST /api/swaps - accept a match and schedule the swap
pub async fn accept_match(
    State(coordinator): State<Arc<SwapCoordinator>>,
    Json(request): Json<AcceptMatchRequest>,
) -> Result<Json<ApiResponse<ActiveSwap>>, ApiError> {
    request.validate()?;

    let swap = coordinator
        .accept_match(
            request.return_id,
            request.matched_candidate_id,
            request.meetup,
            request.scheduled_time,
        )
        .await;

    Ok(Json(ApiResponse::ok(swap)))
}

/// GET /api/swaps/:id - look up a swap by id
pub async fn get_swap(
    State(coordinator): State<Arc<SwapCoordinator>>,
    Path(swap_id): Path<Uuid>,
) -> Result<Json<ApiResponse<ActiveSwap>>, ApiError> {
    let swap = coordinator
        .get_by_id(swap_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Swap {} not found", swap_id)))?;

    Ok(Json(ApiResponse::ok(swap)))
}

/// GET /api/swaps/by-return/:return_id - look up a swap by either party's
/// return reference
pub async fn get_swap_by_return(
    State(coordinator): State<Arc<SwapCoordinator>>,
    Path(return_id): Path<String>,
) -> Result<Json<ApiResponse<ActiveSwap>>, ApiError> {
    let swap = coordinator
        .get_by_return_id(&return_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("No swap for return {}", return_id)))?;

    Ok(Json(ApiResponse::ok(swap)))
}

/// POST /api/swaps/:id/messages - post a message to the swap thread
pub async fn send_message(
    State(coordinator): State<Arc<SwapCoordinator>>,
    Path(swap_id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<SwapMessage>>, ApiError> {
    request.validate()?;

    let message = coordinator
        .add_message(
            swap_id,
            request.sender_email,
            request.sender_name,
            request.message,
        )
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Swap {} not found", swap_id)))?;

    Ok(Json(ApiResponse::ok(message)))
}

/// POST /api/swaps/:id/verify - evaluate a party's GPS/QR verification.
///
/// Always answers 200: an unknown swap id yields the all-false result, per
/// the soft-failure contract.
pub async fn verify_swap(
    State(coordinator): State<Arc<SwapCoordinator>>,
    Path(swap_id): Path<Uuid>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<ApiResponse<SwapVerificationResult>>, ApiError> {
    request.validate()?;

    let result = coordinator
        .verify(
            swap_id,
            Coordinate::new(request.lat, request.lng),
            request.qr_scanned,
            request.is_requester_side,
        )
        .await;

    Ok(Json(ApiResponse::ok(result)))
}
