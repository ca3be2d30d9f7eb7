//! API handlers for the SwapLink backend

pub mod candidates;
pub mod matches;
pub mod swaps;

pub use candidates::{list_candidates, register_candidate};
pub use matches::{find_matches, suggest_meetups};
pub use swaps::{accept_match, get_swap, get_swap_by_return, send_message, verify_swap};
