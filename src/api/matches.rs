use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{Identifier, MatchDetails, MatchList};

#[instrument(skip(client))]
pub(crate) async fn get_live_matches(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<MatchList> {
    get_matchlist(client, base_url, "/matches/live").await
}

#[instrument(skip(client))]
pub(crate) async fn get_upcoming_matches(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<MatchList> {
    get_matchlist(client, base_url, "/matches/upcoming").await
}

#[instrument(skip(client))]
pub(crate) async fn get_results(client: &reqwest::Client, base_url: &str) -> Result<MatchList> {
    get_matchlist(client, base_url, "/matches/results").await
}

async fn get_matchlist(client: &reqwest::Client, base_url: &str, path: &str) -> Result<MatchList> {
    let url = api::endpoint_url(base_url, path, &[])?;
    let matches: MatchList = api::get_data(client, url).await?;
    debug!(count = matches.len(), path, "parsed match list");
    Ok(matches)
}

#[instrument(skip(client), fields(match_id = %match_id))]
pub(crate) async fn get_match(
    client: &reqwest::Client,
    base_url: &str,
    match_id: &Identifier,
) -> Result<MatchDetails> {
    let url = api::resource_url(base_url, "/matches", match_id)?;
    let details: MatchDetails = api::get_data(client, url).await?;
    debug!(maps = details.maps.len(), "parsed match details");
    Ok(details)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::MockServer;

    use super::*;
    use crate::api::test_support::{base_url, mount_body, mount_success};
    use crate::error::DashboardError;
    use crate::model::Numeric;

    #[tokio::test]
    async fn test_get_live_matches() {
        let server = MockServer::start().await;
        mount_success(
            &server,
            "/api/matches/live",
            json!([{
                "id": 1,
                "team1": {"name": "A", "score": 1},
                "team2": {"name": "B", "score": 0},
                "event": "Champions"
            }]),
        )
        .await;

        let client = reqwest::Client::new();
        let matches = get_live_matches(&client, &base_url(&server)).await.unwrap();

        assert_eq!(matches.len(), 1);
        let first = &matches[0];
        assert_eq!(first.id, Identifier::Numeric(1));
        assert_eq!(first.team1.name, "A");
        assert_eq!(first.team1.score, Some(Numeric::Integer(1)));
        assert_eq!(first.event.as_deref(), Some("Champions"));
    }

    #[tokio::test]
    async fn test_get_results_preserves_order() {
        let server = MockServer::start().await;
        mount_success(
            &server,
            "/api/matches/results",
            json!([
                {"id": "3", "team1": {"name": "C"}, "team2": {"name": "D"}},
                {"id": "1", "team1": {"name": "A"}, "team2": {"name": "B"}},
                {"id": "2", "team1": {"name": "E"}, "team2": {"name": "F"}}
            ]),
        )
        .await;

        let client = reqwest::Client::new();
        let matches = get_results(&client, &base_url(&server)).await.unwrap();
        let ids: Vec<String> = matches.iter().map(|m| m.id.to_string()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[tokio::test]
    async fn test_get_upcoming_matches_failure_envelope() {
        let server = MockServer::start().await;
        mount_body(
            &server,
            "/api/matches/upcoming",
            200,
            json!({"success": false, "data": [], "error": "scrape failed"}),
        )
        .await;

        let client = reqwest::Client::new();
        let result = get_upcoming_matches(&client, &base_url(&server)).await;
        assert!(matches!(result, Err(DashboardError::Api { .. })));
    }

    #[tokio::test]
    async fn test_get_match() {
        let server = MockServer::start().await;
        mount_success(
            &server,
            "/api/matches/595657",
            json!({
                "id": "595657",
                "team1": {"name": "Sentinels", "score": 2},
                "team2": {"name": "LOUD", "score": 1},
                "status": "completed",
                "event": "Champions",
                "format": "Bo3",
                "maps": [
                    {"map": "Ascent", "team1Score": 13, "team2Score": 9,
                     "team1Players": [], "team2Players": []},
                    {"map": "Bind", "team1Score": 11, "team2Score": 13,
                     "team1Players": [], "team2Players": []}
                ]
            }),
        )
        .await;

        let client = reqwest::Client::new();
        let details = get_match(&client, &base_url(&server), &Identifier::from("595657"))
            .await
            .unwrap();
        assert_eq!(details.format.as_deref(), Some("Bo3"));
        assert_eq!(details.maps.len(), 2);
        assert_eq!(details.maps[1].map, "Bind");
    }

    #[tokio::test]
    async fn test_get_match_keeps_text_id_in_one_segment() {
        let server = MockServer::start().await;
        mount_success(
            &server,
            "/api/matches/a%2Fb",
            json!({"id": "a/b", "team1": {"name": "A"}, "team2": {"name": "B"}}),
        )
        .await;

        let client = reqwest::Client::new();
        let details = get_match(&client, &base_url(&server), &Identifier::from("a/b"))
            .await
            .unwrap();
        assert_eq!(details.summary.id, Identifier::from("a/b"));
    }
}
