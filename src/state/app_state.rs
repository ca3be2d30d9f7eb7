//! Application state shared across handlers

use std::sync::Arc;

use crate::candidates::CandidateRepository;
use crate::matching::MatchEngine;
use crate::meetup::MeetupSelector;
use crate::swaps::SwapCoordinator;

use axum::extract::FromRef;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub candidate_repo: Arc<dyn CandidateRepository>,
    pub match_engine: Arc<MatchEngine>,
    pub meetup_selector: Arc<MeetupSelector>,
    pub swap_coordinator: Arc<SwapCoordinator>,
}

impl AppState {
    pub fn new(
        candidate_repo: Arc<dyn CandidateRepository>,
        match_engine: Arc<MatchEngine>,
        meetup_selector: Arc<MeetupSelector>,
        swap_coordinator: Arc<SwapCoordinator>,
    ) -> Self {
        Self {
            candidate_repo,
            match_engine,
            meetup_selector,
            swap_coordinator,
        }
    }
}

impl FromRef<AppState> for Arc<dyn CandidateRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.candidate_repo.clone()
    }
}

impl FromRef<AppState> for Arc<MatchEngine> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.match_engine.clone()
    }
}

impl FromRef<AppState> for Arc<MeetupSelector> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.meetup_selector.clone()
    }
}

impl FromRef<AppState> for Arc<SwapCoordinator> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.swap_coordinator.clone()
    }
}
