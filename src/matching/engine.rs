//! Swap Match Engine
//!
//! Scans the candidate pool for a requester's return, filters by product
//! relevance and radius, scores the survivors with a fixed weighted formula
//! and attaches meetup suggestions to each ranked match.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::candidates::{CandidateRepository, SwapCandidate};
use crate::geo::{distance_km, round1, round2};
use crate::matching::model::{MatchStatus, SwapMatch};
use crate::meetup::MeetupSelector;
use crate::models::Coordinate;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Weight for the distance component in the match score (0-1)
const WEIGHT_DISTANCE: f64 = 0.4;

/// Weight for variant compatibility in the match score (0-1)
const WEIGHT_COMPATIBILITY: f64 = 0.3;

/// Compatibility component awarded when variants do not line up
const INCOMPATIBLE_COMPONENT: f64 = 0.05;

/// Weight for candidate recency in the match score (0-1)
const WEIGHT_RECENCY: f64 = 0.2;

/// Candidates older than this contribute no recency component
const RECENCY_WINDOW_DAYS: f64 = 7.0;

/// Weight for the candidate's trust score in the match score (0-1)
const WEIGHT_TRUST: f64 = 0.1;

/// Search radius used when the caller does not provide one
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Maximum matches returned per query
const MAX_MATCHES: usize = 3;

/// Maximum meetup suggestions attached to each match
const MAX_MEETUPS_PER_MATCH: usize = 3;

// ============================================================================
// Matching Policies
// ============================================================================

/// Loose product-name relevance: accept when either name contains the first
/// word of the other, case-insensitive. Tolerant of catalog naming variance
/// ("Classic Oxford Shirt" vs "Oxford Slim Fit Shirt").
pub fn is_product_match(requested: &str, candidate: &str) -> bool {
    let requested = requested.to_lowercase();
    let candidate = candidate.to_lowercase();

    let requested_first = requested.split_whitespace().next().unwrap_or("");
    let candidate_first = candidate.split_whitespace().next().unwrap_or("");

    candidate.contains(requested_first) || requested.contains(candidate_first)
}

/// Variant compatibility: the candidate holds what the requester wants, or
/// wants what the requester holds. Substring checks in either direction,
/// since a swap can be proposed from either party's point of view.
pub fn is_variant_compatible(
    requester_current: &str,
    requester_desired: &str,
    candidate: &SwapCandidate,
) -> bool {
    let candidate_current = candidate.current_variant.to_lowercase();
    let candidate_desired = candidate.desired_variant.to_lowercase();

    candidate_current.contains(&requester_desired.to_lowercase())
        || candidate_desired.contains(&requester_current.to_lowercase())
}

// ============================================================================
// Match Engine Service
// ============================================================================

/// Match engine over the candidate pool
pub struct MatchEngine {
    candidates: Arc<dyn CandidateRepository>,
    meetup_selector: Arc<MeetupSelector>,
}

impl MatchEngine {
    pub fn new(
        candidates: Arc<dyn CandidateRepository>,
        meetup_selector: Arc<MeetupSelector>,
    ) -> Self {
        Self {
            candidates,
            meetup_selector,
        }
    }

    /// Find the best swap matches for a requester.
    ///
    /// Returns up to three matches sorted by descending score; an empty list
    /// when nothing relevant is within the radius. Never fails.
    pub async fn find_matches(
        &self,
        requester: Coordinate,
        product_name: &str,
        current_variant: &str,
        desired_variant: &str,
        radius_km: Option<f64>,
    ) -> Vec<SwapMatch> {
        let radius_km = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        let pool = self.candidates.approved().await;

        let mut scored: Vec<(f64, SwapCandidate, f64)> = pool
            .into_iter()
            .filter(|candidate| is_product_match(product_name, &candidate.product_name))
            .filter_map(|candidate| {
                let distance = distance_km(requester, candidate.location);
                if distance > radius_km {
                    return None;
                }
                let score = self.score_candidate(
                    &candidate,
                    distance,
                    radius_km,
                    current_variant,
                    desired_variant,
                );
                Some((score, candidate, distance))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let matches: Vec<SwapMatch> = scored
            .into_iter()
            .take(MAX_MATCHES)
            .map(|(score, candidate, distance)| SwapMatch {
                id: Uuid::new_v4(),
                return_id: None,
                matched_candidate_id: candidate.id,
                distance_km: round1(distance),
                match_score: round2(score),
                matched_name: candidate.name.clone(),
                matched_area: candidate.area.clone(),
                matched_current_variant: candidate.current_variant.clone(),
                desired_variant: desired_variant.to_string(),
                meetup_suggestions: self
                    .meetup_selector
                    .suggest(requester, candidate.location)
                    .into_iter()
                    .take(MAX_MEETUPS_PER_MATCH)
                    .collect(),
                status: MatchStatus::Pending,
                created_at: Utc::now(),
            })
            .collect();

        tracing::debug!(
            product = %product_name,
            radius_km,
            matches = matches.len(),
            "Match query evaluated"
        );

        matches
    }

    /// Weighted sum over distance decay, variant compatibility, candidate
    /// recency and trust. Weights sum to 1.0, so the score stays in [0, 1].
    fn score_candidate(
        &self,
        candidate: &SwapCandidate,
        distance: f64,
        radius_km: f64,
        current_variant: &str,
        desired_variant: &str,
    ) -> f64 {
        // Linear decay to zero at the radius edge
        let distance_component = (1.0 - distance / radius_km).max(0.0) * WEIGHT_DISTANCE;

        let compatibility_component =
            if is_variant_compatible(current_variant, desired_variant, candidate) {
                WEIGHT_COMPATIBILITY
            } else {
                INCOMPATIBLE_COMPONENT
            };

        let age_days =
            (Utc::now() - candidate.created_at).num_seconds() as f64 / 86_400.0;
        let recency_component = (1.0 - age_days / RECENCY_WINDOW_DAYS).max(0.0) * WEIGHT_RECENCY;

        let trust_component = candidate.trust_score * WEIGHT_TRUST;

        distance_component + compatibility_component + recency_component + trust_component
    }
}
