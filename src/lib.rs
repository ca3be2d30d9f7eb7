//! SwapLink Backend Library
//!
//! Swap-matching and coordination engine for return management: candidate
//! matching by proximity and variant compatibility, meetup point selection,
//! and dual-sided GPS/QR verification of scheduled swaps.

pub mod candidates;
pub mod config;
pub mod error;
pub mod geo;
pub mod handlers;
pub mod matching;
pub mod meetup;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod swaps;
