//! Loader for the charting JSON artifacts.
//!
//! The data pipeline produces a match index (`matches.json`) and one point
//! file per match (`points/<match_id>.json`); this module deserializes them
//! into the typed input model. All I/O lives here at the edge; the engine
//! itself never touches the filesystem.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{MatchInfo, Point};

/// Load the match index, sorted by date with the most recent match first.
pub fn load_match_index(path: &Path) -> Result<Vec<MatchInfo>> {
    let bytes = fs::read(path)?;
    let mut matches: Vec<MatchInfo> = serde_json::from_slice(&bytes)?;
    log::debug!("loaded {} matches from {:?}", matches.len(), path);
    // Dates are YYYYMMDD strings, so lexicographic order is date order.
    matches.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(matches)
}

/// Load one match's ordered point log.
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path)?;
    let points: Vec<Point> = serde_json::from_slice(&bytes)?;
    log::debug!("loaded {} points from {:?}", points.len(), path);
    Ok(points)
}
