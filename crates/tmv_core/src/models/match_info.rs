//! Match metadata from the charting index.

use serde::{Deserialize, Serialize};

/// Descriptive metadata for one charted match.
///
/// Used only to label output (headers, report titles); the statistics
/// engine never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub id: String,
    pub tournament: String,
    /// YYYYMMDD, kept as an opaque string and sorted lexicographically.
    pub date: String,
    #[serde(default)]
    pub round: String,
    pub player1: String,
    pub player2: String,
    #[serde(default)]
    pub surface: String,
    #[serde(default)]
    pub point_count: u32,
}

impl MatchInfo {
    /// Header line for reports, e.g. "Alcaraz vs Sinner | US Open R16".
    pub fn title(&self) -> String {
        format!("{} vs {} | {} {}", self.player1, self.player2, self.tournament, self.round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_info_deserializes_index_entry() {
        let json = r#"{
            "id": "20230910-M-US_Open-F-Novak_Djokovic-Daniil_Medvedev",
            "tournament": "US Open",
            "date": "20230910",
            "round": "F",
            "player1": "Novak Djokovic",
            "player2": "Daniil Medvedev",
            "surface": "Hard",
            "pointCount": 231
        }"#;
        let info: MatchInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.point_count, 231);
        assert_eq!(info.title(), "Novak Djokovic vs Daniil Medvedev | US Open F");
    }
}
