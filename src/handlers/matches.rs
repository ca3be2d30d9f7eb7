//! Match search and meetup suggestion handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::ApiError;
use crate::matching::{FindMatchesQuery, MatchEngine, SwapMatch};
use crate::meetup::{MeetupSelector, MeetupSuggestion};
use crate::models::{ApiResponse, Coordinate};

/// GET /api/matches - ranked swap matches for a requester's return
pub async fn find_matches(
    State(match_engine): State<Arc<MatchEngine>>,
    Query(query): Query<FindMatchesQuery>,
) -> Result<Json<ApiResponse<Vec<SwapMatch>>>, ApiError> {
    query.validate()?;

    let matches = match_engine
        .find_matches(
            Coordinate::new(query.lat, query.lng),
            &query.product_name,
            &query.current_variant,
            &query.desired_variant,
            query.radius_km,
        )
        .await;

    Ok(Json(ApiResponse::ok(matches)))
}

/// Query parameters for a meetup suggestion request
#[derive(Debug, Deserialize, Validate)]
pub struct SuggestMeetupsQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat1: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng1: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat2: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng2: f64,
}

/// GET /api/meetups - public meetup points near the midpoint of two parties
pub async fn suggest_meetups(
    State(selector): State<Arc<MeetupSelector>>,
    Query(query): Query<SuggestMeetupsQuery>,
) -> Result<Json<ApiResponse<Vec<MeetupSuggestion>>>, ApiError> {
    query.validate()?;

    let suggestions = selector.suggest(
        Coordinate::new(query.lat1, query.lng1),
        Coordinate::new(query.lat2, query.lng2),
    );

    Ok(Json(ApiResponse::ok(suggestions)))
}
