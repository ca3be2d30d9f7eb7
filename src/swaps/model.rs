//! Active swap models and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::meetup::MeetupPoint;

/// A stateful coordination record for a matched pair, from acceptance through
/// dual verification to completion
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActiveSwap {
    pub id: Uuid,
    /// Party A's return reference
    pub return_id: String,
    /// Party B's return reference
    pub partner_return_id: String,
    pub meetup: MeetupPoint,
    pub scheduled_time: DateTime<Utc>,
    /// Opaque verification token presented by party A's QR code
    pub qr_code_user1: String,
    /// Opaque verification token presented by party B's QR code
    pub qr_code_user2: String,
    pub status: SwapStatus,
    pub events: Vec<SwapEvent>,
    pub messages: Vec<SwapMessage>,
    pub user1_verified: bool,
    pub user2_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Swap coordination state machine.
///
/// Status only advances; `InProgress` is reserved for callers that want to
/// mark active coordination and is never produced internally, and `Cancelled`
/// is the only non-forward transition.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwapStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Immutable audit entry, append-only per swap
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SwapEvent {
    pub id: Uuid,
    pub return_id: String,
    pub event_type: SwapEventType,
    /// Opaque event payload
    pub event_data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwapEventType {
    UserAccepted,
    LocationChosen,
    GpsVerified,
    Completed,
}

/// Chat message between the two parties, append-only per swap
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SwapMessage {
    pub id: Uuid,
    pub return_id: String,
    pub sender_email: String,
    pub sender_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a single verification attempt.
///
/// An unknown swap id yields the all-false value rather than an error; the
/// caller branches on absence.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SwapVerificationResult {
    pub gps_verified: bool,
    pub qr_verified: bool,
    pub photo_verified: bool,
    pub all_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SwapStatus>,
    /// Measured distance to the meetup point in meters, when GPS was checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    pub credit_awarded: u32,
}

impl SwapVerificationResult {
    /// Soft negative result for an unknown swap id
    pub fn not_found() -> Self {
        Self {
            gps_verified: false,
            qr_verified: false,
            photo_verified: false,
            all_verified: false,
            status: None,
            distance_m: None,
            credit_awarded: 0,
        }
    }
}

/// Request DTO for accepting a match and scheduling the swap
#[derive(Debug, Deserialize, Validate)]
pub struct AcceptMatchRequest {
    #[validate(length(min = 1))]
    pub return_id: String,
    #[validate(length(min = 1))]
    pub matched_candidate_id: String,
    pub meetup: MeetupPoint,
    pub scheduled_time: DateTime<Utc>,
}

/// Request DTO for posting a message to a swap
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(email)]
    pub sender_email: String,
    #[validate(length(min = 1))]
    pub sender_name: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// Request DTO for a verification attempt
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    pub qr_scanned: bool,
    /// True when party A (the requester side) is verifying
    pub is_requester_side: bool,
}
