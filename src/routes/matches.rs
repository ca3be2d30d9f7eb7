//! Match search route definitions

use axum::{routing::get, Router};

use crate::handlers::{find_matches, suggest_meetups};
use crate::state::AppState;

pub fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/api/matches", get(find_matches))
        .route("/api/meetups", get(suggest_meetups))
}
