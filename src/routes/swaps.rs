//! Swap coordination route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{accept_match, get_swap, get_swap_by_return, send_message, verify_swap};
use crate::state::AppState;

pub fn swap_routes() -> Router<AppState> {
    Router::new()
        .route("/api/swaps", post(accept_match))
        .route("/api/swaps/:id", get(get_swap))
        .route("/api/swaps/by-return/:return_id", get(get_swap_by_return))
        .route("/api/swaps/:id/messages", post(send_message))
        .route("/api/swaps/:id/verify", post(verify_swap))
}
