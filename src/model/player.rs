use serde::{Deserialize, Serialize};

use super::common::{Identifier, Region, Timespan};

/// Filters for the stats leaderboard endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsQuery {
    pub region: Region,
    pub timespan: Timespan,
    pub min_rounds: u32,
}

impl StatsQuery {
    /// Query-string pairs in the order the endpoint documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("region", self.region.to_string()),
            ("timespan", self.timespan.to_string()),
            ("min_rounds", self.min_rounds.to_string()),
        ]
    }
}

impl Default for StatsQuery {
    fn default() -> Self {
        Self {
            region: Region::Na,
            timespan: Timespan::Days60,
            min_rounds: 100,
        }
    }
}

/// One row of the stats leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: PlayerRef,
    pub stats: PlayerStats,
    #[serde(default)]
    pub agents: Vec<String>,
}

/// The player a leaderboard row belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub id: Identifier,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Aggregated stats over the leaderboard window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub rating: f64,
    pub acs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kills: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headshot: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_kills: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_deaths: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clutch_percent: Option<f64>,
}

/// Player profile data from `/players/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: Identifier,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings: Option<f64>,
    #[serde(default)]
    pub team_history: Vec<PlayerTeamHistory>,
}

/// A past or current team stint on a player profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTeamHistory {
    pub team_id: Identifier,
    pub team_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_date: Option<String>,
}
