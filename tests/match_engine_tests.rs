//! Match Engine Integration Tests
//!
//! Exercises the scoring pipeline against the demo candidate pool and checks
//! the ranking invariants end to end.

use std::sync::Arc;

use swaplink_server::candidates::{CandidateRepository, InMemoryCandidateRepository};
use swaplink_server::matching::MatchEngine;
use swaplink_server::meetup::MeetupSelector;
use swaplink_server::models::Coordinate;

fn demo_engine() -> (MatchEngine, Arc<InMemoryCandidateRepository>) {
    let repo = Arc::new(InMemoryCandidateRepository::with_demo_data());
    let engine = MatchEngine::new(repo.clone(), Arc::new(MeetupSelector::default()));
    (engine, repo)
}

// ============================================================================
// Ranking Invariants
// ============================================================================

#[tokio::test]
async fn test_matches_sorted_descending_and_capped() {
    let (engine, _) = demo_engine();

    let matches = engine
        .find_matches(
            Coordinate::new(21.1702, 72.8311),
            "Classic Oxford Shirt",
            "Size M",
            "Size L",
            Some(10.0),
        )
        .await;

    assert!(!matches.is_empty());
    assert!(matches.len() <= 3);
    for pair in matches.windows(2) {
        assert!(
            pair[0].match_score >= pair[1].match_score,
            "matches must be non-increasing in score"
        );
    }
    for m in &matches {
        assert!(m.distance_km <= 10.0);
        assert!((0.0..=1.0).contains(&m.match_score));
    }
}

#[tokio::test]
async fn test_every_match_carries_meetup_suggestions() {
    let (engine, _) = demo_engine();

    let matches = engine
        .find_matches(
            Coordinate::new(21.1702, 72.8311),
            "Classic Oxford Shirt",
            "Size M",
            "Size L",
            None,
        )
        .await;

    for m in &matches {
        assert!(!m.meetup_suggestions.is_empty());
        assert!(m.meetup_suggestions.len() <= 3);
        for s in &m.meetup_suggestions {
            assert!(s.distance_user1_km >= 0.0);
            assert!(s.distance_user2_km >= 0.0);
        }
    }
}

// ============================================================================
// Demo Pool Scenarios
// ============================================================================

#[tokio::test]
async fn test_compatible_coincident_candidate_ranks_first() {
    // Priya holds Size L and wants Size M at (21.1702, 72.8311); a requester
    // at the same spot holding Size M and wanting Size L is her mirror image.
    let (engine, _) = demo_engine();

    let matches = engine
        .find_matches(
            Coordinate::new(21.1702, 72.8311),
            "Classic Oxford Shirt",
            "Size M",
            "Size L",
            Some(5.0),
        )
        .await;

    assert!(!matches.is_empty());
    let top = &matches[0];
    assert_eq!(top.matched_name, "Priya Shah");
    assert_eq!(top.distance_km, 0.0);
    assert_eq!(top.matched_current_variant, "Size L");
    assert_eq!(top.desired_variant, "Size L");
    // Zero distance, compatible, two days old, trust 0.92
    assert!(top.match_score > 0.9);
}

#[tokio::test]
async fn test_unrelated_product_returns_empty() {
    let (engine, _) = demo_engine();

    let matches = engine
        .find_matches(
            Coordinate::new(21.1702, 72.8311),
            "Wireless Earbuds",
            "Black",
            "White",
            None,
        )
        .await;

    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_loose_product_name_still_matches() {
    // "Oxford Slim Fit Shirt" must surface for an "Oxford Shirt" query via
    // the first-word containment rule.
    let (engine, _) = demo_engine();

    let matches = engine
        .find_matches(
            Coordinate::new(21.1950, 72.8400),
            "Oxford Shirt",
            "Size M",
            "Size S",
            Some(5.0),
        )
        .await;

    assert!(matches
        .iter()
        .any(|m| m.matched_name == "Sneha Patel"));
}

#[tokio::test]
async fn test_registered_candidate_only_matchable_after_approval() {
    use swaplink_server::candidates::RegisterCandidateRequest;
    use swaplink_server::candidates::SwapCandidate;

    let repo = Arc::new(InMemoryCandidateRepository::new());
    let engine = MatchEngine::new(repo.clone(), Arc::new(MeetupSelector::default()));

    let request = RegisterCandidateRequest {
        email: "new@example.com".to_string(),
        name: "New Candidate".to_string(),
        product_name: "Classic Oxford Shirt".to_string(),
        product_sku: "SHIRT-OXF-01".to_string(),
        current_variant: "Size L".to_string(),
        desired_variant: "Size M".to_string(),
        lat: 21.1702,
        lng: 72.8311,
        area: "Adajan".to_string(),
        reason: "size_issue".to_string(),
        trust_score: Some(0.8),
    };
    repo.insert(SwapCandidate::from(request)).await;

    // Freshly registered candidates are pending, so the pool yields nothing
    let matches = engine
        .find_matches(
            Coordinate::new(21.1702, 72.8311),
            "Classic Oxford Shirt",
            "Size M",
            "Size L",
            None,
        )
        .await;

    assert!(matches.is_empty());
}
