//! Output model: the aggregated statistics for a charted match.
//!
//! Everything here is derived, freshly allocated per computation, and
//! serializable for the rendering layer. Field names and integer/boolean
//! types are part of the external contract and are pinned via serde
//! attributes.

use serde::{Deserialize, Serialize};

use crate::models::point::{PlayerId, ScorePair};

/// How a game was decided, for bar coloring in the momentum charts.
///
/// `Clean` when aces plus rally winners in the game are at least as many as
/// unforced errors; `Unforced` when errors outnumber them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeType {
    Clean,
    Unforced,
}

/// Per-game reduction of the point log.
///
/// `index` is the global, 0-based position in the grouped game sequence and
/// is the stable cross-reference used by navigation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub index: usize,
    /// Grouping key of the game, as supplied by its points.
    pub set_score: ScorePair,
    pub game_score: ScorePair,
    pub server: PlayerId,
    /// The player with strictly more points in the game. A completed game
    /// cannot tie; tied input fails the computation instead of guessing.
    pub winner: PlayerId,
    pub p1_points: u32,
    pub p2_points: u32,
    /// True iff the server did not win the game.
    pub is_break: bool,
    pub is_tiebreak: bool,
    /// Any point of the game was flagged as a break point.
    pub had_break_point: bool,
    pub aces: u32,
    pub double_faults: u32,
    pub rally_winners: u32,
    pub unforced_errors: u32,
    pub outcome_type: OutcomeType,
    /// Running (player 1 games − player 2 games) within the owning set,
    /// evaluated after this game completes. Resets to ±1 at the first game
    /// of every set.
    pub set_momentum: i32,
    /// 0-based position of this game within its set.
    pub set_index: usize,
}

/// Per-set reduction: the set's game range plus per-player statistics
/// scoped to the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSummary {
    pub index: usize,
    /// Display form of the set-score key, e.g. "1-0".
    pub set_score_label: String,
    pub set_score: ScorePair,
    /// Inclusive global game indices; "which set owns game #n" is answered
    /// by range containment against these.
    pub start_game_index: usize,
    pub end_game_index: usize,
    pub game_count: usize,
    pub player1: PlayerStatistics,
    pub player2: PlayerStatistics,
}

impl SetSummary {
    /// Range-containment check against the global game sequence.
    pub fn contains_game(&self, game_index: usize) -> bool {
        game_index >= self.start_game_index && game_index <= self.end_game_index
    }
}

/// Match-wide totals for both players.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchTotals {
    pub player1: PlayerStatistics,
    pub player2: PlayerStatistics,
}

/// The complete statistics model consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchStatistics {
    /// Match-scope player statistics.
    #[serde(rename = "match")]
    pub match_totals: MatchTotals,
    /// Index-aligned with the grouped game sequence.
    pub games: Vec<GameSummary>,
    pub sets: Vec<SetSummary>,
}

impl MatchStatistics {
    /// The defined result for an empty point log: no games, no sets,
    /// all-zero totals. Not an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The set owning the given global game index, if any.
    pub fn set_for_game(&self, game_index: usize) -> Option<&SetSummary> {
        self.sets.iter().find(|set| set.contains_game(game_index))
    }
}

/// Raw per-player counts for one scope (the whole match or a single set).
///
/// Only counts are stored; percentage derivations live in the helper
/// methods so no rounding policy is baked into the model.
///
/// Serve-split fields use the documented approximation for charting data
/// that lacks a first-serve-in flag: every non-double-fault service point
/// counts as a first serve in (and won, when the server took the point),
/// and every double fault counts as a second-serve point. This overcounts
/// first serves in; consumers must label these rows as estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub aces: u32,
    pub double_faults: u32,
    pub first_serve_in: u32,
    pub first_serve_total: u32,
    pub first_serve_won: u32,
    /// Structurally zero under the serve approximation: the only points
    /// attributed to the second serve are double faults, which the server
    /// never wins. Retained so presentation rows render from raw counts.
    pub second_serve_won: u32,
    pub second_serve_total: u32,
    pub break_points_converted: u32,
    pub break_points_faced: u32,
    pub tiebreaks_won: u32,
    pub tiebreaks_played: u32,
    pub receiving_points_won: u32,
    pub receiving_points_total: u32,
    pub points_won: u32,
    pub points_total: u32,
    pub games_won: u32,
    pub games_total: u32,
    pub service_points_won: u32,
    pub service_points_total: u32,
    pub service_games_won: u32,
    pub service_games_total: u32,
    pub max_points_in_row: u32,
    pub max_games_in_row: u32,
}

impl PlayerStatistics {
    fn ratio(numerator: u32, denominator: u32) -> f64 {
        if denominator == 0 {
            0.0
        } else {
            f64::from(numerator) / f64::from(denominator)
        }
    }

    /// Estimated share of first serves in, per the serve approximation.
    pub fn first_serve_ratio(&self) -> f64 {
        Self::ratio(self.first_serve_in, self.first_serve_total)
    }

    /// Win ratio on (estimated) first serves.
    pub fn first_serve_win_ratio(&self) -> f64 {
        Self::ratio(self.first_serve_won, self.first_serve_in)
    }

    /// Win ratio on (estimated) second serves.
    pub fn second_serve_win_ratio(&self) -> f64 {
        Self::ratio(self.second_serve_won, self.second_serve_total)
    }

    pub fn service_points_ratio(&self) -> f64 {
        Self::ratio(self.service_points_won, self.service_points_total)
    }

    pub fn receiving_points_ratio(&self) -> f64 {
        Self::ratio(self.receiving_points_won, self.receiving_points_total)
    }
}
