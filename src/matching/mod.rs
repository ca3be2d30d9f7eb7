//! Swap match engine

mod engine;
mod model;

pub use engine::{is_product_match, is_variant_compatible, MatchEngine, DEFAULT_RADIUS_KM};
pub use model::{FindMatchesQuery, MatchStatus, SwapMatch};
