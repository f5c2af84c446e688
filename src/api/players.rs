use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{Identifier, LeaderboardEntry, PlayerProfile, StatsQuery};

#[instrument(skip(client))]
pub(crate) async fn get_player_stats(
    client: &reqwest::Client,
    base_url: &str,
    query: &StatsQuery,
) -> Result<Vec<LeaderboardEntry>> {
    let url = api::endpoint_url(base_url, "/players/stats", &query.to_pairs())?;
    let entries: Vec<LeaderboardEntry> = api::get_data(client, url).await?;
    debug!(count = entries.len(), "parsed stats leaderboard");
    Ok(entries)
}

#[instrument(skip(client), fields(player_id = %player_id))]
pub(crate) async fn get_player(
    client: &reqwest::Client,
    base_url: &str,
    player_id: &Identifier,
) -> Result<PlayerProfile> {
    let url = api::resource_url(base_url, "/players", player_id)?;
    api::get_data(client, url).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::test_support::{base_url, mount_success};

    #[tokio::test]
    async fn test_get_player_stats_sends_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/players/stats"))
            .and(query_param("region", "na"))
            .and(query_param("timespan", "60"))
            .and(query_param("min_rounds", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{
                    "player": {"id": "1", "name": "aspas"},
                    "agents": ["jett"],
                    "stats": {"rating": 1.31, "acs": 262.0}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let entries = get_player_stats(&client, &base_url(&server), &StatsQuery::default())
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].player.name, "aspas");
        assert_eq!(entries[0].stats.rating, 1.31);
    }

    #[tokio::test]
    async fn test_get_player() {
        let server = MockServer::start().await;
        mount_success(
            &server,
            "/api/players/9",
            json!({"id": "9", "name": "TenZ", "realName": "Tyson Ngo", "team": "Sentinels"}),
        )
        .await;

        let client = reqwest::Client::new();
        let player = get_player(&client, &base_url(&server), &Identifier::from(9u64))
            .await
            .unwrap();
        assert_eq!(player.real_name.as_deref(), Some("Tyson Ngo"));
        assert!(player.team_history.is_empty());
    }
}
