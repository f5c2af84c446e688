use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{Event, EventStatus};

#[instrument(skip(client), fields(status = %status))]
pub(crate) async fn get_events(
    client: &reqwest::Client,
    base_url: &str,
    status: EventStatus,
) -> Result<Vec<Event>> {
    let url = api::endpoint_url(base_url, "/events", &[("status", status.to_string())])?;
    let events: Vec<Event> = api::get_data(client, url).await?;
    debug!(count = events.len(), "parsed events");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::test_support::base_url;

    #[tokio::test]
    async fn test_get_ongoing_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .and(query_param("status", "ongoing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [
                    {"id": "2097", "name": "VCT 2025: Champions", "status": "ongoing",
                     "prizePool": "$2,250,000", "dates": "Sep 12 - Oct 5"},
                    {"name": "Challengers NA", "status": "ongoing"}
                ]
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let events = get_events(&client, &base_url(&server), EventStatus::Ongoing)
            .await
            .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].prize_pool.as_deref(), Some("$2,250,000"));
        assert_eq!(events[1].status, EventStatus::Ongoing);
        assert!(events[1].dates.is_none());
    }
}
