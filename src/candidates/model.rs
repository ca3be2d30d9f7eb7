//! Swap candidate models and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Coordinate;

/// A customer offering one product variant and wanting another
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SwapCandidate {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub product_name: String,
    pub product_sku: String,
    /// Variant the candidate currently holds
    pub current_variant: String,
    /// Variant the candidate wants instead
    pub desired_variant: String,
    pub location: Coordinate,
    pub area: String,
    pub reason: String,
    pub status: CandidateStatus,
    /// Trust score in [0, 1], fed into match scoring
    pub trust_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Candidate lifecycle status; only approved candidates are matchable
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Pending,
    Approved,
}

/// Request DTO for registering a swap candidate
#[derive(Debug, Deserialize)]
pub struct RegisterCandidateRequest {
    pub email: String,
    pub name: String,
    pub product_name: String,
    pub product_sku: String,
    pub current_variant: String,
    pub desired_variant: String,
    pub lat: f64,
    pub lng: f64,
    pub area: String,
    pub reason: String,
    pub trust_score: Option<f64>,
}

impl RegisterCandidateRequest {
    /// Validate request
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("Email must not be empty".to_string());
        }
        if self.product_name.trim().is_empty() {
            return Err("Product name must not be empty".to_string());
        }
        if self.current_variant == self.desired_variant {
            return Err("Current and desired variant must differ".to_string());
        }
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err("Latitude must be a finite value in [-90, 90]".to_string());
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err("Longitude must be a finite value in [-180, 180]".to_string());
        }
        if let Some(trust) = self.trust_score {
            if !trust.is_finite() || !(0.0..=1.0).contains(&trust) {
                return Err("Trust score must be in [0, 1]".to_string());
            }
        }
        Ok(())
    }
}

impl From<RegisterCandidateRequest> for SwapCandidate {
    fn from(req: RegisterCandidateRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: req.email,
            name: req.name,
            product_name: req.product_name,
            product_sku: req.product_sku,
            current_variant: req.current_variant,
            desired_variant: req.desired_variant,
            location: Coordinate::new(req.lat, req.lng),
            area: req.area,
            reason: req.reason,
            status: CandidateStatus::Pending,
            trust_score: req.trust_score.unwrap_or(0.5),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterCandidateRequest {
        RegisterCandidateRequest {
            email: "priya@example.com".to_string(),
            name: "Priya".to_string(),
            product_name: "Classic Oxford Shirt".to_string(),
            product_sku: "SHIRT-OXF-01".to_string(),
            current_variant: "Size L".to_string(),
            desired_variant: "Size M".to_string(),
            lat: 21.1702,
            lng: 72.8311,
            area: "Adajan".to_string(),
            reason: "size_issue".to_string(),
            trust_score: Some(0.9),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_same_variant_rejected() {
        let mut req = valid_request();
        req.desired_variant = req.current_variant.clone();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let mut req = valid_request();
        req.lat = f64::NAN;
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.lng = f64::INFINITY;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_trust_score_bounds() {
        let mut req = valid_request();
        req.trust_score = Some(1.5);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_registration_defaults() {
        let mut req = valid_request();
        req.trust_score = None;
        let candidate = SwapCandidate::from(req);
        assert_eq!(candidate.status, CandidateStatus::Pending);
        assert_eq!(candidate.trust_score, 0.5);
    }
}
