//! Candidate pool storage
//!
//! The match engine only reads candidates; registration appends. Backed by an
//! in-memory list here, with the trait as the seam for a durable store.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{CandidateStatus, SwapCandidate};
use crate::models::Coordinate;

/// Storage abstraction for the swap candidate pool
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// All approved candidates, eligible for matching
    async fn approved(&self) -> Vec<SwapCandidate>;

    /// All registered candidates regardless of status
    async fn list(&self) -> Vec<SwapCandidate>;

    async fn get(&self, id: Uuid) -> Option<SwapCandidate>;

    async fn insert(&self, candidate: SwapCandidate);

    async fn count(&self) -> usize;
}

/// In-memory candidate pool
#[derive(Default)]
pub struct InMemoryCandidateRepository {
    candidates: RwLock<Vec<SwapCandidate>>,
}

impl InMemoryCandidateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool pre-loaded with the demo candidates
    pub fn with_demo_data() -> Self {
        Self {
            candidates: RwLock::new(demo_candidates()),
        }
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn approved(&self) -> Vec<SwapCandidate> {
        self.candidates
            .read()
            .await
            .iter()
            .filter(|c| c.status == CandidateStatus::Approved)
            .cloned()
            .collect()
    }

    async fn list(&self) -> Vec<SwapCandidate> {
        self.candidates.read().await.clone()
    }

    async fn get(&self, id: Uuid) -> Option<SwapCandidate> {
        self.candidates
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    async fn insert(&self, candidate: SwapCandidate) {
        self.candidates.write().await.push(candidate);
    }

    async fn count(&self) -> usize {
        self.candidates.read().await.len()
    }
}

/// Pre-approved demo pool around Surat, mirroring the seeded reference data
fn demo_candidates() -> Vec<SwapCandidate> {
    let now = Utc::now();

    let seed = |name: &str,
                email: &str,
                product: &str,
                sku: &str,
                current: &str,
                desired: &str,
                lat: f64,
                lng: f64,
                area: &str,
                trust: f64,
                age_days: i64| SwapCandidate {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: name.to_string(),
        product_name: product.to_string(),
        product_sku: sku.to_string(),
        current_variant: current.to_string(),
        desired_variant: desired.to_string(),
        location: Coordinate::new(lat, lng),
        area: area.to_string(),
        reason: "size_issue".to_string(),
        status: CandidateStatus::Approved,
        trust_score: trust,
        created_at: now - Duration::days(age_days),
    };

    vec![
        seed(
            "Priya Shah",
            "priya.shah@example.com",
            "Classic Oxford Shirt",
            "SHIRT-OXF-01",
            "Size L",
            "Size M",
            21.1702,
            72.8311,
            "Adajan",
            0.92,
            2,
        ),
        seed(
            "Rahul Mehta",
            "rahul.mehta@example.com",
            "Classic Oxford Shirt",
            "SHIRT-OXF-01",
            "Size M",
            "Size L",
            21.1850,
            72.8100,
            "Vesu",
            0.85,
            1,
        ),
        seed(
            "Sneha Patel",
            "sneha.patel@example.com",
            "Oxford Slim Fit Shirt",
            "SHIRT-OXF-02",
            "Size S",
            "Size M",
            21.1950,
            72.8400,
            "Athwa",
            0.78,
            4,
        ),
        seed(
            "Amit Desai",
            "amit.desai@example.com",
            "Running Shoes Pro",
            "SHOE-RUN-09",
            "UK 9",
            "UK 8",
            21.1600,
            72.8500,
            "Piplod",
            0.88,
            3,
        ),
        seed(
            "Kavita Joshi",
            "kavita.joshi@example.com",
            "Running Shoes Pro",
            "SHOE-RUN-09",
            "UK 8",
            "UK 9",
            21.2100,
            72.8200,
            "Katargam",
            0.95,
            5,
        ),
        seed(
            "Nilesh Rana",
            "nilesh.rana@example.com",
            "Denim Jacket",
            "JKT-DNM-04",
            "Size XL",
            "Size L",
            21.1400,
            72.7900,
            "Rander",
            0.70,
            9,
        ),
    ]
}
