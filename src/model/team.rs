use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::Identifier;

/// A team as listed in the regional rankings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRanking {
    pub id: Identifier,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<TeamRecord>,
}

/// Win/loss record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

/// Complete team profile from `/teams/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    #[serde(flatten)]
    pub team: TeamRanking,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<TeamRoster>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Players and staff of a team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRoster {
    #[serde(default)]
    pub players: Vec<TeamRosterMember>,
    #[serde(default)]
    pub staff: Vec<TeamRosterMember>,
}

/// A member of a team's roster (player or staff).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRosterMember {
    pub id: Identifier,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Region codes known to the rankings endpoint, with display names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionList {
    pub regions: Vec<String>,
    #[serde(default)]
    pub descriptions: BTreeMap<String, String>,
}
