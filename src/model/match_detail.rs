use serde::{Deserialize, Serialize};

use super::common::Numeric;
use super::matchlist::MatchSummary;

/// Full details of a single match, including per-map player stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    #[serde(flatten)]
    pub summary: MatchSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub maps: Vec<MapResult>,
    #[serde(default)]
    pub streams: Vec<MatchStream>,
    #[serde(default)]
    pub vods: Vec<String>,
}

/// The outcome of a single map within a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResult {
    pub map: String,
    pub team1_score: Numeric,
    pub team2_score: Numeric,
    #[serde(default)]
    pub team1_players: Vec<PlayerMapStat>,
    #[serde(default)]
    pub team2_players: Vec<PlayerMapStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked: Option<String>,
}

/// A player's line on a single map. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMapStat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kills: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acs: Option<Numeric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr: Option<Numeric>,
}

/// A stream link associated with a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStream {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_match_details() {
        let json = r#"{
            "id": "595657",
            "team1": {"name": "Sentinels", "score": 2},
            "team2": {"name": "LOUD", "score": "1"},
            "status": "live",
            "event": "Champions",
            "maps": [{
                "map": "Ascent",
                "team1Score": 13,
                "team2Score": 11,
                "team1Players": [
                    {"playerName": "TenZ", "agent": "Jett", "kills": 24, "acs": 281.5}
                ],
                "team2Players": []
            }]
        }"#;
        let details: MatchDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.summary.team1.name, "Sentinels");
        assert_eq!(details.maps.len(), 1);
        assert_eq!(details.maps[0].team1_players[0].kills, Some(Numeric::Integer(24)));
        assert!(details.maps[0].team1_players[0].deaths.is_none());
        assert!(details.streams.is_empty());
    }

    #[test]
    fn test_unknown_match_status_is_tolerated() {
        let json = r#"{
            "id": 1,
            "team1": {"name": "A"},
            "team2": {"name": "B"},
            "status": "postponed"
        }"#;
        let summary: MatchSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.status, crate::model::MatchStatus::Unknown);
        assert!(summary.team1.score.is_none());
    }
}
