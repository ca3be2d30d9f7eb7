//! Route definitions for the SwapLink API

mod candidates;
mod matches;
mod swaps;

pub use candidates::candidate_routes;
pub use matches::match_routes;
pub use swaps::swap_routes;
