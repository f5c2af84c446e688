use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::error::Result;
use crate::model::*;

/// What `fetch_all` asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub upcoming_limit: usize,
    pub results_limit: usize,
    pub stats: StatsQuery,
    pub players_limit: usize,
    pub rankings_region: Region,
    pub rankings_limit: usize,
    pub events_status: EventStatus,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            upcoming_limit: 5,
            results_limit: 5,
            stats: StatsQuery::default(),
            players_limit: 10,
            rankings_region: Region::Na,
            rankings_limit: 10,
            events_status: EventStatus::Ongoing,
        }
    }
}

/// Everything fetched for one dashboard render.
///
/// Built once by [`Dashboard::fetch_all`] and only read afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub live_matches: MatchList,
    pub upcoming_matches: MatchList,
    pub recent_results: MatchList,
    pub top_players: Vec<LeaderboardEntry>,
    pub team_rankings: Vec<TeamRanking>,
    pub ongoing_events: Vec<Event>,
    pub fetched_at: DateTime<Local>,
    #[serde(skip)]
    pub stats_query: StatsQuery,
    #[serde(skip)]
    pub rankings_region: Region,
}

/// Best-effort view over [`ApiClient`].
///
/// Every method swallows its failure: list resources fall back to an empty
/// list, single resources to `None`, and a warning naming the resource is
/// logged. A single broken endpoint never takes the whole run down.
pub struct Dashboard {
    client: ApiClient,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every dashboard section, one request after another.
    pub async fn fetch_all(&self, options: &DashboardOptions) -> DashboardSnapshot {
        let live_matches = self.live_matches().await;
        let upcoming_matches = self.upcoming_matches(Some(options.upcoming_limit)).await;
        let recent_results = self.recent_results(Some(options.results_limit)).await;
        let top_players = self
            .top_players(&options.stats, Some(options.players_limit))
            .await;
        let team_rankings = self
            .team_rankings(options.rankings_region, Some(options.rankings_limit))
            .await;
        let ongoing_events = self.events(options.events_status, None).await;

        DashboardSnapshot {
            live_matches,
            upcoming_matches,
            recent_results,
            top_players,
            team_rankings,
            ongoing_events,
            fetched_at: Local::now(),
            stats_query: options.stats.clone(),
            rankings_region: options.rankings_region,
        }
    }

    pub async fn live_matches(&self) -> MatchList {
        recover_list("live matches", self.client.get_live_matches().await, None)
    }

    pub async fn upcoming_matches(&self, limit: Option<usize>) -> MatchList {
        recover_list(
            "upcoming matches",
            self.client.get_upcoming_matches().await,
            limit,
        )
    }

    pub async fn recent_results(&self, limit: Option<usize>) -> MatchList {
        recover_list("results", self.client.get_results().await, limit)
    }

    pub async fn top_players(
        &self,
        query: &StatsQuery,
        limit: Option<usize>,
    ) -> Vec<LeaderboardEntry> {
        recover_list(
            "top players",
            self.client.get_player_stats(query).await,
            limit,
        )
    }

    pub async fn team_rankings(&self, region: Region, limit: Option<usize>) -> Vec<TeamRanking> {
        recover_list(
            "team rankings",
            self.client.get_team_rankings(region).await,
            limit,
        )
    }

    pub async fn events(&self, status: EventStatus, limit: Option<usize>) -> Vec<Event> {
        recover_list("events", self.client.get_events(status).await, limit)
    }

    pub async fn regions(&self) -> Option<RegionList> {
        recover_one("regions", self.client.get_regions().await)
    }

    pub async fn match_details(&self, match_id: &Identifier) -> Option<MatchDetails> {
        recover_one(
            &format!("match {match_id}"),
            self.client.get_match(match_id).await,
        )
    }

    pub async fn player_profile(&self, player_id: &Identifier) -> Option<PlayerProfile> {
        recover_one(
            &format!("player {player_id}"),
            self.client.get_player(player_id).await,
        )
    }

    pub async fn team_profile(&self, team_id: &Identifier) -> Option<TeamProfile> {
        recover_one(
            &format!("team {team_id}"),
            self.client.get_team(team_id).await,
        )
    }

    /// Fetch an endpoint as untyped JSON; `None` if it could not be fetched.
    pub async fn raw(&self, path: &str, query: &[(&str, String)]) -> Option<Value> {
        recover_one(path, self.client.get_raw(path, query).await)
    }
}

/// Keep the first `limit` items of a successful fetch, or log and fall back to `[]`.
fn recover_list<T>(resource: &str, result: Result<Vec<T>>, limit: Option<usize>) -> Vec<T> {
    match result {
        Ok(mut items) => {
            if let Some(limit) = limit {
                items.truncate(limit);
            }
            debug!(resource, count = items.len(), "fetched");
            items
        }
        Err(err) => {
            warn!(error = %err, "Error fetching {resource}");
            Vec::new()
        }
    }
}

/// Unwrap a successful fetch, or log and fall back to `None`.
fn recover_one<T>(resource: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "Error fetching {resource}");
            None
        }
    }
}
