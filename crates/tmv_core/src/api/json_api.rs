//! JSON boundary for external renderers.
//!
//! String-in/string-out: the caller hands over one request document and
//! always receives valid JSON back, with failures folded into the response
//! envelope instead of panicking across the boundary.

use serde::{Deserialize, Serialize};

use crate::analysis::analyze_match;
use crate::models::{MatchInfo, MatchStatistics, Point};

/// Request schema version accepted by [`analyze_match_json`].
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub schema_version: u8,
    /// Optional metadata, echoed back for labeling; never read by the
    /// engine.
    #[serde(default, rename = "match")]
    pub match_info: Option<MatchInfo>,
    pub points: Vec<Point>,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none", rename = "match")]
    match_info: Option<MatchInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<MatchStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl AnalyzeResponse {
    fn success(match_info: Option<MatchInfo>, statistics: MatchStatistics) -> Self {
        Self { ok: true, match_info, statistics: Some(statistics), error: None }
    }

    fn failure(message: String) -> Self {
        Self { ok: false, match_info: None, statistics: None, error: Some(message) }
    }
}

/// Analyze one match request and return the response document.
///
/// The serve-split figures in the returned statistics are estimates: the
/// charting data has no first-serve-in flag, so non-double-fault service
/// points are all attributed to the first serve. Consumers must present
/// those rows as approximate.
pub fn analyze_match_json(request_json: &str) -> String {
    let response = match build_response(request_json) {
        Ok(response) => response,
        Err(message) => AnalyzeResponse::failure(message),
    };
    serde_json::to_string(&response)
        .unwrap_or_else(|e| format!(r#"{{"ok":false,"error":"response serialization: {e}"}}"#))
}

fn build_response(request_json: &str) -> Result<AnalyzeResponse, String> {
    let request: AnalyzeRequest =
        serde_json::from_str(request_json).map_err(|e| format!("invalid request: {e}"))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!(
            "unsupported schema_version {} (expected {})",
            request.schema_version, SCHEMA_VERSION
        ));
    }

    let statistics = analyze_match(&request.points).map_err(|e| e.to_string())?;
    Ok(AnalyzeResponse::success(request.match_info, statistics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn point_json(set: (u32, u32), game: (u32, u32), svr: u8, winner: u8) -> String {
        format!(
            r#"{{"set1":{},"set2":{},"gm1":{},"gm2":{},"svr":{},"ptWinner":{}}}"#,
            set.0, set.1, game.0, game.1, svr, winner
        )
    }

    #[test]
    fn test_valid_request_returns_statistics() {
        let request = format!(
            r#"{{"schema_version":1,"points":[{},{}]}}"#,
            point_json((0, 0), (0, 0), 1, 1),
            point_json((0, 0), (0, 0), 1, 1),
        );
        let response: Value = serde_json::from_str(&analyze_match_json(&request)).unwrap();
        assert_eq!(response["ok"], true);
        assert_eq!(response["statistics"]["games"].as_array().unwrap().len(), 1);
        assert_eq!(response["statistics"]["games"][0]["winner"], 1);
        assert_eq!(response["statistics"]["match"]["player1"]["pointsWon"], 2);
        assert!(response.get("error").is_none());
    }

    #[test]
    fn test_metadata_is_echoed() {
        let request = format!(
            r#"{{"schema_version":1,
                 "match":{{"id":"m1","tournament":"Wimbledon","date":"20240701",
                           "player1":"A","player2":"B"}},
                 "points":[{}]}}"#,
            point_json((0, 0), (0, 0), 1, 1),
        );
        let response: Value = serde_json::from_str(&analyze_match_json(&request)).unwrap();
        assert_eq!(response["ok"], true);
        assert_eq!(response["match"]["tournament"], "Wimbledon");
    }

    #[test]
    fn test_malformed_winner_reports_index() {
        let request = format!(
            r#"{{"schema_version":1,"points":[{},{}]}}"#,
            point_json((0, 0), (0, 0), 1, 1),
            point_json((0, 0), (0, 0), 1, 3),
        );
        let response: Value = serde_json::from_str(&analyze_match_json(&request)).unwrap();
        assert_eq!(response["ok"], false);
        let message = response["error"].as_str().unwrap();
        assert!(message.contains("point 1"), "got: {message}");
        assert!(message.contains("ptWinner"), "got: {message}");
    }

    #[test]
    fn test_wrong_schema_version_is_rejected() {
        let request = r#"{"schema_version":9,"points":[]}"#;
        let response: Value = serde_json::from_str(&analyze_match_json(request)).unwrap();
        assert_eq!(response["ok"], false);
        assert!(response["error"].as_str().unwrap().contains("schema_version"));
    }

    #[test]
    fn test_unparseable_request_is_an_error_response() {
        let response: Value = serde_json::from_str(&analyze_match_json("not json")).unwrap();
        assert_eq!(response["ok"], false);
        assert!(response["error"].as_str().unwrap().contains("invalid request"));
    }

    #[test]
    fn test_empty_point_list_is_a_valid_outcome() {
        let request = r#"{"schema_version":1,"points":[]}"#;
        let response: Value = serde_json::from_str(&analyze_match_json(request)).unwrap();
        assert_eq!(response["ok"], true);
        assert_eq!(response["statistics"]["games"].as_array().unwrap().len(), 0);
        assert_eq!(response["statistics"]["sets"].as_array().unwrap().len(), 0);
    }
}
