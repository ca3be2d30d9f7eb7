//! Swap coordination service
//!
//! Owns every `ActiveSwap` for its whole lifetime. The registry keeps one
//! mutex per swap so the verify flag-set-then-check sequence is atomic per
//! record; operations on different swaps never contend.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::json;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::geo::distance_km;
use crate::meetup::MeetupPoint;
use crate::models::Coordinate;
use crate::swaps::model::{
    ActiveSwap, SwapEvent, SwapEventType, SwapMessage, SwapStatus, SwapVerificationResult,
};

/// GPS proximity tolerance for verification (150 m)
const GPS_TOLERANCE_KM: f64 = 0.15;

/// Credit awarded once per swap on completion
const COMPLETION_CREDIT: u32 = 50;

/// Length of the random token suffix in a QR code
const QR_TOKEN_LEN: usize = 10;

/// In-memory registry of active swaps, keyed by swap id with a secondary
/// index over both parties' return ids
#[derive(Default)]
pub struct SwapCoordinator {
    swaps: RwLock<HashMap<Uuid, Arc<Mutex<ActiveSwap>>>>,
    by_return_id: RwLock<HashMap<String, Uuid>>,
}

impl SwapCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a match: create the swap in `scheduled` state with fresh
    /// verification tokens and the acceptance events.
    pub async fn accept_match(
        &self,
        return_id: String,
        matched_candidate_id: String,
        meetup: MeetupPoint,
        scheduled_time: DateTime<Utc>,
    ) -> ActiveSwap {
        let swap_id = Uuid::new_v4();
        let now = Utc::now();

        let events = vec![
            SwapEvent {
                id: Uuid::new_v4(),
                return_id: return_id.clone(),
                event_type: SwapEventType::UserAccepted,
                event_data: json!({
                    "matched_candidate_id": matched_candidate_id,
                }),
                created_at: now,
            },
            SwapEvent {
                id: Uuid::new_v4(),
                return_id: return_id.clone(),
                event_type: SwapEventType::LocationChosen,
                event_data: json!({
                    "meetup_id": meetup.id,
                    "meetup_name": meetup.name,
                    "scheduled_time": scheduled_time,
                }),
                created_at: now,
            },
        ];

        let swap = ActiveSwap {
            id: swap_id,
            return_id: return_id.clone(),
            partner_return_id: matched_candidate_id.clone(),
            meetup,
            scheduled_time,
            qr_code_user1: generate_qr_token(),
            qr_code_user2: generate_qr_token(),
            status: SwapStatus::Scheduled,
            events,
            messages: Vec::new(),
            user1_verified: false,
            user2_verified: false,
            created_at: now,
        };

        self.swaps
            .write()
            .await
            .insert(swap_id, Arc::new(Mutex::new(swap.clone())));
        {
            let mut by_return = self.by_return_id.write().await;
            by_return.insert(return_id.clone(), swap_id);
            by_return.insert(matched_candidate_id, swap_id);
        }

        tracing::info!(swap_id = %swap_id, return_id = %return_id, "Swap scheduled");

        swap
    }

    /// Read-only lookup by swap id
    pub async fn get_by_id(&self, swap_id: Uuid) -> Option<ActiveSwap> {
        let entry = self.swaps.read().await.get(&swap_id).cloned()?;
        let swap = entry.lock().await;
        Some(swap.clone())
    }

    /// Read-only lookup by either party's return id
    pub async fn get_by_return_id(&self, return_id: &str) -> Option<ActiveSwap> {
        let swap_id = *self.by_return_id.read().await.get(return_id)?;
        self.get_by_id(swap_id).await
    }

    /// Append a message to the swap's thread
    pub async fn add_message(
        &self,
        swap_id: Uuid,
        sender_email: String,
        sender_name: String,
        message: String,
    ) -> Option<SwapMessage> {
        let entry = self.swaps.read().await.get(&swap_id).cloned()?;
        let mut swap = entry.lock().await;

        let created = SwapMessage {
            id: Uuid::new_v4(),
            return_id: swap.return_id.clone(),
            sender_email,
            sender_name,
            message,
            created_at: Utc::now(),
        };
        swap.messages.push(created.clone());

        Some(created)
    }

    /// Evaluate a party's verification attempt against GPS and QR evidence
    /// and advance the state machine.
    ///
    /// The verifying party's flag is set even when the GPS or QR check fails;
    /// the booleans in the result report verification quality but do not gate
    /// the mutation. That mirrors current product behavior and is under
    /// review (see DESIGN.md).
    pub async fn verify(
        &self,
        swap_id: Uuid,
        presented: Coordinate,
        qr_scanned: bool,
        is_requester_side: bool,
    ) -> SwapVerificationResult {
        let Some(entry) = self.swaps.read().await.get(&swap_id).cloned() else {
            return SwapVerificationResult::not_found();
        };

        // Hold the record lock across flag-set and the all-verified check so
        // two racing verify calls cannot both observe the other flag unset.
        let mut swap = entry.lock().await;

        let distance = distance_km(presented, swap.meetup.location);
        let gps_verified = distance <= GPS_TOLERANCE_KM;
        let qr_verified = qr_scanned;
        // Photo evidence is a stub in this iteration; always passes.
        let photo_verified = true;

        if is_requester_side {
            swap.user1_verified = true;
        } else {
            swap.user2_verified = true;
        }

        let distance_m = (distance * 1000.0).round();

        if gps_verified && qr_verified {
            let event = SwapEvent {
                id: Uuid::new_v4(),
                return_id: swap.return_id.clone(),
                event_type: SwapEventType::GpsVerified,
                event_data: json!({
                    "distance_m": distance_m,
                    "is_requester_side": is_requester_side,
                }),
                created_at: Utc::now(),
            };
            swap.events.push(event);
        }

        let all_verified = swap.user1_verified && swap.user2_verified;
        let mut credit_awarded = 0;

        // Award the completion credit exactly once per swap lifetime
        if all_verified && swap.status != SwapStatus::Completed {
            swap.status = SwapStatus::Completed;
            credit_awarded = COMPLETION_CREDIT;
            let event = SwapEvent {
                id: Uuid::new_v4(),
                return_id: swap.return_id.clone(),
                event_type: SwapEventType::Completed,
                event_data: json!({ "credit_awarded": COMPLETION_CREDIT }),
                created_at: Utc::now(),
            };
            swap.events.push(event);
            tracing::info!(swap_id = %swap_id, "Swap completed, both parties verified");
        }

        SwapVerificationResult {
            gps_verified,
            qr_verified,
            photo_verified,
            all_verified,
            status: Some(swap.status),
            distance_m: Some(distance_m),
            credit_awarded,
        }
    }

    /// Number of swaps tracked by the registry
    pub async fn count(&self) -> usize {
        self.swaps.read().await.len()
    }
}

/// Opaque collision-resistant verification token. Compared for possession
/// only, so no cryptographic requirement applies.
fn generate_qr_token() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(QR_TOKEN_LEN)
        .map(char::from)
        .collect();
    format!("SWAP-{}", suffix.to_uppercase())
}
