//! # tmv_core - Tennis Match Statistics Engine
//!
//! This library turns the point-by-point log of a charted tennis match into
//! a multi-level statistics model (match → set → game) consumed by
//! visualization layers.
//!
//! ## Features
//! - Run-length grouping of points into games and games into sets
//! - Per-player serve/return/break/streak statistics at match and set scope
//! - Chart-ready per-game metrics (per-set momentum, outcome classification)
//! - Pure, allocation-fresh computation: no I/O, no shared state, identical
//!   output for identical input
//!
//! ## Serve-split approximation
//! The charting data carries no first-serve-in flag, so the serve-split
//! statistics are estimates: every non-double-fault service point is
//! attributed to the first serve, and double faults are the only
//! second-serve points. This systematically overcounts first serves in and
//! is documented behavior, not a defect; presentation layers must label
//! these rows as approximate.

pub mod analysis;
pub mod api;
pub mod data;
pub mod error;
pub mod models;

pub use analysis::analyze_match;
pub use api::analyze_match_json;
pub use error::{MatchError, Result};
pub use models::{
    GameSummary, MatchInfo, MatchStatistics, MatchTotals, OutcomeType, PlayerId,
    PlayerStatistics, Point, ScorePair, SetSummary,
};
