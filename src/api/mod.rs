pub(crate) mod events;
pub(crate) mod matches;
pub(crate) mod players;
pub(crate) mod teams;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::model::{Envelope, Identifier};

/// Join `path` onto the API base URL and append `query` pairs.
pub(crate) fn endpoint_url(base_url: &str, path: &str, query: &[(&str, String)]) -> Result<Url> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    let parsed = if query.is_empty() {
        Url::parse(&raw)
    } else {
        Url::parse_with_params(&raw, query)
    };
    parsed.map_err(|e| DashboardError::InvalidUrl {
        url: raw,
        reason: e.to_string(),
    })
}

/// URL of a single resource under `collection`.
///
/// The id is pushed as one percent-encoded path segment, so a text id
/// containing `/` or `?` cannot escape into another route.
pub(crate) fn resource_url(base_url: &str, collection: &str, id: &Identifier) -> Result<Url> {
    let mut url = endpoint_url(base_url, collection, &[])?;
    url.path_segments_mut()
        .map_err(|()| DashboardError::InvalidUrl {
            url: base_url.to_string(),
            reason: "base url cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .push(&id.to_string());
    Ok(url)
}

/// Issue a GET and return the status together with the body text.
async fn get_body(client: &reqwest::Client, url: &Url) -> Result<(reqwest::StatusCode, String)> {
    debug!(url = %url, "fetching endpoint");

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| DashboardError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| DashboardError::ResponseBody {
            url: url.to_string(),
            source: e,
        })?;

    Ok((status, body))
}

/// Fetch an endpoint and parse the body as an envelope.
///
/// Error statuses are accepted as long as the body is still an envelope, so the
/// server's own message survives into the diagnostic.
pub(crate) async fn get_envelope(client: &reqwest::Client, url: &Url) -> Result<Envelope<Value>> {
    let (status, body) = get_body(client, url).await?;
    match serde_json::from_str::<Envelope<Value>>(&body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(DashboardError::UnexpectedStatus {
            url: url.to_string(),
            status,
        }),
        Err(source) => Err(DashboardError::Decode {
            url: url.to_string(),
            source,
        }),
    }
}

/// Fetch an endpoint, unwrap the envelope and decode `data` as `T`.
pub(crate) async fn get_data<T: DeserializeOwned>(client: &reqwest::Client, url: Url) -> Result<T> {
    let envelope = get_envelope(client, &url).await?;
    let data = envelope
        .into_data()
        .map_err(|message| DashboardError::Api {
            url: url.to_string(),
            message,
        })?;
    serde_json::from_value(data).map_err(|source| DashboardError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Fetch an endpoint and return the whole JSON body untouched.
pub(crate) async fn get_json(client: &reqwest::Client, url: Url) -> Result<Value> {
    let (status, body) = get_body(client, &url).await?;
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(DashboardError::UnexpectedStatus {
            url: url.to_string(),
            status,
        }),
        Err(source) => Err(DashboardError::Decode {
            url: url.to_string(),
            source,
        }),
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::test_support::{base_url, mount_body, mount_success};
    use super::*;

    #[test]
    fn test_endpoint_url_joins_base_and_query() {
        let url = endpoint_url(
            "http://localhost:3000/api/",
            "/players/stats",
            &[("region", "na".to_string()), ("min_rounds", "100".to_string())],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/players/stats?region=na&min_rounds=100"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_garbage() {
        let result = endpoint_url("not a url", "/matches/live", &[]);
        assert!(matches!(result, Err(DashboardError::InvalidUrl { .. })));
    }

    #[test]
    fn test_resource_url_appends_id_segment() {
        let url = resource_url("http://localhost:3000/api/", "/teams", &Identifier::from(2593u64))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/teams/2593");
    }

    #[test]
    fn test_resource_url_encodes_text_id() {
        let url = resource_url(
            "http://localhost:3000/api",
            "/matches",
            &Identifier::from("a/b?c"),
        )
        .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/matches/a%2Fb%3Fc");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_resource_url_rejects_non_hierarchical_base() {
        let result = resource_url("mailto:someone", "/matches", &Identifier::from(1u64));
        assert!(matches!(result, Err(DashboardError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_get_data_unwraps_envelope() {
        let server = MockServer::start().await;
        mount_success(&server, "/api/things", json!([1, 2, 3])).await;

        let client = reqwest::Client::new();
        let url = endpoint_url(&base_url(&server), "/things", &[]).unwrap();
        let data: Vec<u32> = get_data(&client, url).await.unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_data_reports_server_message_on_error_status() {
        let server = MockServer::start().await;
        mount_body(
            &server,
            "/api/things",
            400,
            json!({"success": false, "error": "Invalid region", "code": 400}),
        )
        .await;

        let client = reqwest::Client::new();
        let url = endpoint_url(&base_url(&server), "/things", &[]).unwrap();
        let result: Result<Vec<u32>> = get_data(&client, url).await;
        match result {
            Err(DashboardError::Api { message, .. }) => assert_eq!(message, "Invalid region"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_data_plain_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/things"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = endpoint_url(&base_url(&server), "/things", &[]).unwrap();
        let result: Result<Vec<u32>> = get_data(&client, url).await;
        assert!(matches!(
            result,
            Err(DashboardError::UnexpectedStatus { status, .. }) if status.as_u16() == 502
        ));
    }

    #[tokio::test]
    async fn test_get_data_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/things"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = endpoint_url(&base_url(&server), "/things", &[]).unwrap();
        let result: Result<Vec<u32>> = get_data(&client, url).await;
        assert!(matches!(result, Err(DashboardError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_get_json_keeps_whole_body() {
        let server = MockServer::start().await;
        mount_success(&server, "/api/things", json!({"regions": ["na"]})).await;

        let client = reqwest::Client::new();
        let url = endpoint_url(&base_url(&server), "/things", &[]).unwrap();
        let value = get_json(&client, url).await.unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"]["regions"][0], json!("na"));
    }
}
