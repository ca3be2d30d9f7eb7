//! Swap candidate pool

mod model;
mod repository;

pub use model::{CandidateStatus, RegisterCandidateRequest, SwapCandidate};
pub use repository::{CandidateRepository, InMemoryCandidateRepository};
