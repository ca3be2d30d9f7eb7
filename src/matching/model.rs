//! Match models and request DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::meetup::MeetupSuggestion;

/// A scored requester-candidate pairing, computed per query and not persisted
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SwapMatch {
    pub id: Uuid,
    /// The requester's return reference, filled in by the caller
    pub return_id: Option<String>,
    pub matched_candidate_id: Uuid,
    /// Distance to the matched party, km (1 decimal)
    pub distance_km: f64,
    /// Weighted score in [0, 1] (2 decimals)
    pub match_score: f64,
    pub matched_name: String,
    pub matched_area: String,
    /// Variant the matched party holds
    pub matched_current_variant: String,
    /// Variant the requester asked for
    pub desired_variant: String,
    pub meetup_suggestions: Vec<MeetupSuggestion>,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
}

/// Query parameters for a match search
#[derive(Debug, Deserialize, Validate)]
pub struct FindMatchesQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[validate(length(min = 1))]
    pub product_name: String,
    #[validate(length(min = 1))]
    pub current_variant: String,
    #[validate(length(min = 1))]
    pub desired_variant: String,
    /// Search radius in km; defaults to 5 when omitted
    #[validate(range(min = 0.000001, max = 100.0))]
    pub radius_km: Option<f64>,
}
