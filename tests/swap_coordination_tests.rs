//! Swap Coordination and Verification Tests
//!
//! Walks the full lifecycle of an active swap: acceptance, messaging and the
//! dual-sided GPS/QR verification state machine.

use chrono::{Duration, Utc};
use swaplink_server::meetup::{MeetupKind, MeetupPoint};
use swaplink_server::models::Coordinate;
use swaplink_server::swaps::{SwapCoordinator, SwapEventType, SwapStatus};

fn vr_surat() -> MeetupPoint {
    MeetupPoint {
        id: "mp-02".to_string(),
        name: "VR Surat Mall".to_string(),
        address: "Dumas Rd, Magdalla, Surat".to_string(),
        location: Coordinate::new(21.1458, 72.7824),
        kind: MeetupKind::Mall,
        icon: "shopping-bag".to_string(),
    }
}

async fn scheduled(coordinator: &SwapCoordinator) -> swaplink_server::swaps::ActiveSwap {
    coordinator
        .accept_match(
            "RET-1001".to_string(),
            "RET-2002".to_string(),
            vr_surat(),
            Utc::now() + Duration::hours(3),
        )
        .await
}

// ============================================================================
// Dual Verification Scenario
// ============================================================================

#[tokio::test]
async fn test_dual_verification_lifecycle() {
    let coordinator = SwapCoordinator::new();
    let swap = scheduled(&coordinator).await;

    // Party A verifies roughly 100 m from the meetup with a scanned QR
    let near = Coordinate::new(21.1458 + 0.0009, 72.7824);
    let first = coordinator.verify(swap.id, near, true, true).await;

    assert!(first.gps_verified);
    assert!(first.qr_verified);
    assert!(first.photo_verified);
    assert!(!first.all_verified);
    assert_eq!(first.credit_awarded, 0);
    assert_eq!(first.status, Some(SwapStatus::Scheduled));

    let mid_state = coordinator.get_by_id(swap.id).await.unwrap();
    assert!(mid_state.user1_verified);
    assert!(!mid_state.user2_verified);

    // Party B verifies roughly 200 m away: outside the 150 m tolerance, so
    // GPS fails, but the flag is still set and the swap completes.
    let far = Coordinate::new(21.1458 + 0.0018, 72.7824);
    let second = coordinator.verify(swap.id, far, true, false).await;

    assert!(!second.gps_verified);
    assert!(second.qr_verified);
    assert!(second.all_verified);
    assert_eq!(second.credit_awarded, 50);
    assert_eq!(second.status, Some(SwapStatus::Completed));
}

#[tokio::test]
async fn test_gps_event_records_distance_in_meters() {
    let coordinator = SwapCoordinator::new();
    let swap = scheduled(&coordinator).await;

    let near = Coordinate::new(21.1458 + 0.0009, 72.7824);
    coordinator.verify(swap.id, near, true, true).await;

    let stored = coordinator.get_by_id(swap.id).await.unwrap();
    let gps_event = stored
        .events
        .iter()
        .find(|e| e.event_type == SwapEventType::GpsVerified)
        .expect("passing GPS+QR verification should append an event");

    let distance_m = gps_event.event_data["distance_m"].as_f64().unwrap();
    assert!(distance_m > 50.0 && distance_m < 150.0);
}

#[tokio::test]
async fn test_no_gps_event_when_qr_missing() {
    let coordinator = SwapCoordinator::new();
    let swap = scheduled(&coordinator).await;

    // At the meetup point but without a QR scan
    coordinator
        .verify(swap.id, vr_surat().location, false, true)
        .await;

    let stored = coordinator.get_by_id(swap.id).await.unwrap();
    assert!(stored
        .events
        .iter()
        .all(|e| e.event_type != SwapEventType::GpsVerified));
}

// ============================================================================
// Monotonicity and Idempotence
// ============================================================================

#[tokio::test]
async fn test_completed_swap_never_reverts() {
    let coordinator = SwapCoordinator::new();
    let swap = scheduled(&coordinator).await;
    let at_meetup = vr_surat().location;

    coordinator.verify(swap.id, at_meetup, true, true).await;
    coordinator.verify(swap.id, at_meetup, true, false).await;

    // A later failed-quality verification must not regress anything
    let far = Coordinate::new(21.2049, 72.8411);
    let result = coordinator.verify(swap.id, far, false, true).await;

    assert_eq!(result.status, Some(SwapStatus::Completed));
    let stored = coordinator.get_by_id(swap.id).await.unwrap();
    assert_eq!(stored.status, SwapStatus::Completed);
    assert!(stored.user1_verified && stored.user2_verified);
}

#[tokio::test]
async fn test_exactly_one_completed_event_and_credit() {
    let coordinator = SwapCoordinator::new();
    let swap = scheduled(&coordinator).await;
    let at_meetup = vr_surat().location;

    let r1 = coordinator.verify(swap.id, at_meetup, true, true).await;
    let r2 = coordinator.verify(swap.id, at_meetup, true, false).await;
    let r3 = coordinator.verify(swap.id, at_meetup, true, true).await;
    let r4 = coordinator.verify(swap.id, at_meetup, true, false).await;

    assert_eq!(r1.credit_awarded, 0);
    assert_eq!(r2.credit_awarded, 50);
    assert_eq!(r3.credit_awarded, 0);
    assert_eq!(r4.credit_awarded, 0);

    let stored = coordinator.get_by_id(swap.id).await.unwrap();
    let completed_events: Vec<_> = stored
        .events
        .iter()
        .filter(|e| e.event_type == SwapEventType::Completed)
        .collect();
    assert_eq!(completed_events.len(), 1);
    assert_eq!(completed_events[0].event_data["credit_awarded"], 50);

    // Scheduling data is untouched by repeat verification
    assert_eq!(stored.scheduled_time, swap.scheduled_time);
    assert_eq!(stored.meetup.id, swap.meetup.id);
}

// ============================================================================
// Messaging and Lookup
// ============================================================================

#[tokio::test]
async fn test_messages_are_chronological_and_scoped_to_swap() {
    let coordinator = SwapCoordinator::new();
    let swap_a = scheduled(&coordinator).await;
    let swap_b = coordinator
        .accept_match(
            "RET-3003".to_string(),
            "RET-4004".to_string(),
            vr_surat(),
            Utc::now(),
        )
        .await;

    coordinator
        .add_message(
            swap_a.id,
            "a@example.com".to_string(),
            "A".to_string(),
            "see you at the mall entrance".to_string(),
        )
        .await
        .unwrap();
    coordinator
        .add_message(
            swap_b.id,
            "b@example.com".to_string(),
            "B".to_string(),
            "running 10 min late".to_string(),
        )
        .await
        .unwrap();

    let a = coordinator.get_by_id(swap_a.id).await.unwrap();
    let b = coordinator.get_by_id(swap_b.id).await.unwrap();
    assert_eq!(a.messages.len(), 1);
    assert_eq!(b.messages.len(), 1);
    assert_eq!(a.messages[0].message, "see you at the mall entrance");
    assert_eq!(b.messages[0].message, "running 10 min late");
}

#[tokio::test]
async fn test_lookup_by_partner_return_id() {
    let coordinator = SwapCoordinator::new();
    let swap = scheduled(&coordinator).await;

    let by_partner = coordinator.get_by_return_id("RET-2002").await.unwrap();
    assert_eq!(by_partner.id, swap.id);
    assert_eq!(by_partner.return_id, "RET-1001");
}
