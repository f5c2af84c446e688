use serde_json::Value;
use tracing::instrument;

use crate::api;
use crate::config::Config;
use crate::error::Result;
use crate::model::*;

/// The main entry point for talking to the statistics API.
///
/// `ApiClient` wraps a [`reqwest::Client`] and a base URL and exposes one
/// method per resource kind. Every method issues exactly one GET request and
/// returns the unwrapped `data` of the response envelope.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> vlr_dashboard::Result<()> {
/// use vlr_dashboard::{ApiClient, Config};
///
/// let client = ApiClient::from_config(&Config::default())?;
/// let live = client.get_live_matches().await?;
/// println!("{} matches live", live.len());
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with the timeout and base URL from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            http: config.http_client()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
        }
    }

    /// Fetch matches currently in progress.
    pub async fn get_live_matches(&self) -> Result<MatchList> {
        api::matches::get_live_matches(&self.http, &self.base_url).await
    }

    /// Fetch scheduled matches.
    pub async fn get_upcoming_matches(&self) -> Result<MatchList> {
        api::matches::get_upcoming_matches(&self.http, &self.base_url).await
    }

    /// Fetch recently completed matches.
    pub async fn get_results(&self) -> Result<MatchList> {
        api::matches::get_results(&self.http, &self.base_url).await
    }

    /// Fetch full details, including per-map player stats, for one match.
    pub async fn get_match(&self, match_id: &Identifier) -> Result<MatchDetails> {
        api::matches::get_match(&self.http, &self.base_url, match_id).await
    }

    /// Fetch the stats leaderboard filtered by region, timespan and minimum rounds.
    pub async fn get_player_stats(&self, query: &StatsQuery) -> Result<Vec<LeaderboardEntry>> {
        api::players::get_player_stats(&self.http, &self.base_url, query).await
    }

    /// Fetch a player profile.
    pub async fn get_player(&self, player_id: &Identifier) -> Result<PlayerProfile> {
        api::players::get_player(&self.http, &self.base_url, player_id).await
    }

    /// Fetch the team rankings of a region.
    pub async fn get_team_rankings(&self, region: Region) -> Result<Vec<TeamRanking>> {
        api::teams::get_team_rankings(&self.http, &self.base_url, region).await
    }

    /// Fetch the region codes the rankings endpoint accepts.
    pub async fn get_regions(&self) -> Result<RegionList> {
        api::teams::get_regions(&self.http, &self.base_url).await
    }

    /// Fetch a team profile with its roster.
    pub async fn get_team(&self, team_id: &Identifier) -> Result<TeamProfile> {
        api::teams::get_team(&self.http, &self.base_url, team_id).await
    }

    /// Fetch events with the given status.
    pub async fn get_events(&self, status: EventStatus) -> Result<Vec<Event>> {
        api::events::get_events(&self.http, &self.base_url, status).await
    }

    /// Fetch any endpoint and return its body as untyped JSON.
    #[instrument(skip(self))]
    pub async fn get_raw(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = api::endpoint_url(&self.base_url, path, query)?;
        api::get_json(&self.http, url).await
    }
}
