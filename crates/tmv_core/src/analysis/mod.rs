//! # Analysis Module
//!
//! The aggregation engine: pure scans from an ordered point log to the
//! multi-level statistics model.
//!
//! ## Submodules
//!
//! - `grouping` - run-length partitioning of points into games and games
//!   into sets
//! - `match_stats` - game aggregation, set assembly, and the
//!   [`analyze_match`] entry point
//! - `player_stats` - per-player statistics reduction for any scope
//! - `momentum` - streak scan and per-set game differential

pub mod grouping;
pub mod match_stats;
pub mod momentum;
pub mod player_stats;


pub use match_stats::analyze_match;
pub use player_stats::compute_player_stats;
