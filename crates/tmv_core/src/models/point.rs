//! Input model: one charted point and the player identifier.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// One of the two players in a singles match.
///
/// Charting data identifies players by the integers 1 and 2; conversion from
/// raw input is fallible and the engine validates every point before
/// aggregating (see `analysis::match_stats`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// The other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// The raw 1|2 representation used by the charting data.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }

    /// Fallible conversion carrying the point index for error reporting.
    pub fn from_raw(value: u8, field: &'static str, index: usize) -> Result<Self> {
        Self::try_from(value).map_err(|_| MatchError::InvalidPlayer { index, field, value })
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            1 => Ok(PlayerId::Player1),
            2 => Ok(PlayerId::Player2),
            other => Err(other),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.as_u8()
    }
}

/// A `{p1, p2}` score pair, used for both set scores and game scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScorePair {
    pub p1: u32,
    pub p2: u32,
}

impl ScorePair {
    pub const fn new(p1: u32, p2: u32) -> Self {
        Self { p1, p2 }
    }

    /// Display form, e.g. `"6-4"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.p1, self.p2)
    }
}

/// One already-decided point, as produced by the charting data pipeline.
///
/// Field names mirror the JSON artifacts exactly. `svr` and `ptWinner` are
/// kept raw (`u8`) because this type sits on the trust boundary; the engine
/// validates them against {1, 2} before any aggregation.
///
/// `isSvrWinner` is a label-only flag: service outcomes are always derived
/// from `svr`/`ptWinner`, never read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    /// 1-based point number within the match (label only).
    #[serde(default)]
    pub pt: u32,
    /// Set score before this point, part of the game grouping key.
    pub set1: u32,
    pub set2: u32,
    /// Game score before this point, part of the game grouping key.
    pub gm1: u32,
    pub gm2: u32,
    /// Point-score label, e.g. "40-15" or "AD-40" (label only).
    #[serde(default)]
    pub pts: String,
    /// Serving player, expected in {1, 2}.
    pub svr: u8,
    /// Point winner, expected in {1, 2}.
    pub pt_winner: u8,
    #[serde(default)]
    pub is_ace: bool,
    #[serde(default, rename = "isUnret")]
    pub is_unreturnable: bool,
    #[serde(default)]
    pub is_rally_winner: bool,
    #[serde(default, rename = "isForced")]
    pub is_forced_error: bool,
    #[serde(default, rename = "isUnforced")]
    pub is_unforced_error: bool,
    #[serde(default, rename = "isDouble")]
    pub is_double_fault: bool,
    /// Shots in the rally (label only).
    #[serde(default)]
    pub rally_count: u32,
    #[serde(default, rename = "isSvrWinner")]
    pub is_server_winner: bool,
    /// Point played inside a tiebreak. Supplied by the data source; the
    /// engine never re-derives tiebreak status from score values.
    #[serde(default, rename = "tb")]
    pub is_tiebreak: bool,
    #[serde(default, rename = "isBreakPt")]
    pub is_break_point: bool,
}

impl Point {
    /// The structural grouping key: a game is a maximal contiguous run of
    /// points sharing this key. Compared field-wise, never as a
    /// concatenated string.
    #[inline]
    pub fn game_key(&self) -> (u32, u32, u32, u32) {
        (self.set1, self.set2, self.gm1, self.gm2)
    }

    /// The set portion of the grouping key.
    #[inline]
    pub fn set_key(&self) -> (u32, u32) {
        (self.set1, self.set2)
    }
}
