//! Candidate pool route definitions

use axum::{routing::get, Router};

use crate::handlers::{list_candidates, register_candidate};
use crate::state::AppState;

pub fn candidate_routes() -> Router<AppState> {
    Router::new().route(
        "/api/candidates",
        get(list_candidates).post(register_candidate),
    )
}
