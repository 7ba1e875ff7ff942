//! HTTP client for the Teamtailor REST API.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;

use super::error::{ApiError, ApiResult};
use super::types::{Candidate, Document, ListCandidatesParams};

/// Media type of every JSON:API request and response.
const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Header selecting the API revision.
const API_VERSION_HEADER: &str = "X-Api-Version";

/// API revision this client is written against.
pub const API_VERSION: &str = "20240404";

/// Read-only client for the Teamtailor candidates API.
///
/// The base URL and API key are fixed for the lifetime of the client. Idle
/// connections are not kept, so every call opens and closes its own
/// connection, and no timeout is applied.
#[derive(Clone)]
pub struct TeamtailorClient {
    base_url: Url,
    api_key: String,
    http: Client,
}

impl std::fmt::Debug for TeamtailorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamtailorClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl TeamtailorClient {
    /// Create a client for the API at `base_url` (e.g. `https://api.teamtailor.com/v1`).
    ///
    /// The key needs Admin scope to read candidates.
    pub fn new(base_url: impl AsRef<str>, api_key: impl Into<String>) -> ApiResult<Self> {
        let raw = base_url.as_ref();
        let base_url = Url::parse(raw).map_err(|e| ApiError::invalid_url(raw, e))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::invalid_url(
                raw,
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let http = Client::builder()
            .pool_max_idle_per_host(0)
            .user_agent(format!("teamtailor-mcp/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url,
            api_key: api_key.into(),
            http,
        })
    }

    /// List candidates, with optional pagination and filters.
    ///
    /// Only the first page described by `params` is fetched.
    pub async fn list_candidates(&self, params: &ListCandidatesParams) -> ApiResult<Vec<Candidate>> {
        let url = self.candidates_url(params)?;
        let document: Document<Vec<Candidate>> = self.request(url).await?;
        debug!(count = document.data.len(), "Listed candidates");
        Ok(document.data)
    }

    /// Get a single candidate by id.
    pub async fn get_candidate(&self, id: u64) -> ApiResult<Candidate> {
        let url = self.candidate_url(id)?;
        let document: Document<Candidate> = self.request(url).await?;
        let candidate = document.data;
        debug!(
            id = ?candidate.id(),
            referred = ?candidate.attributes().and_then(|a| a.referred),
            "Fetched candidate"
        );
        Ok(candidate)
    }

    /// Build the listing URL: `{base}/candidates` plus pagination and filter parameters.
    pub fn candidates_url(&self, params: &ListCandidatesParams) -> ApiResult<Url> {
        let mut url = self.endpoint("candidates")?;

        {
            let mut query = url.query_pairs_mut();
            if let Some(page) = params.page {
                query.append_pair("page", &page.to_string());
            }
            if let Some(per_page) = params.per_page {
                query.append_pair("per_page", &per_page.to_string());
            }
            if let Some(filter) = &params.filter {
                for (key, value) in filter.query_pairs() {
                    query.append_pair(key, value);
                }
            }
        }

        // An empty serializer still leaves a trailing '?'.
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    /// Build the single-record URL: `{base}/candidates/{id}`.
    pub fn candidate_url(&self, id: u64) -> ApiResult<Url> {
        self.endpoint(&format!("candidates/{id}"))
    }

    /// Append `path` to the base URL, keeping any path prefix such as `/v1`.
    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        let raw = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| ApiError::invalid_url(raw, e))
    }

    /// Perform an authenticated GET and decode the JSON body.
    #[instrument(skip_all, fields(url = %url))]
    async fn request<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        debug!("Sending Teamtailor API request");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Token token={}", self.api_key))
            .header(CONTENT_TYPE, JSON_API_MEDIA_TYPE)
            .header(ACCEPT, JSON_API_MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Teamtailor API returned an error status");
            return Err(ApiError::http(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Teamtailor API returned an unparseable body: {}", e);
            ApiError::Parse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teamtailor::CandidateFilter;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_KEY: &str = "test-api-key";

    fn client_for(server: &MockServer) -> TeamtailorClient {
        TeamtailorClient::new(format!("{}/v1", server.uri()), TEST_KEY).unwrap()
    }

    fn offline_client() -> TeamtailorClient {
        TeamtailorClient::new("https://api.teamtailor.com/v1", TEST_KEY).unwrap()
    }

    #[test]
    fn test_list_url_with_pagination() {
        let client = offline_client();
        let url = client
            .candidates_url(&ListCandidatesParams::new().page(3).per_page(25))
            .unwrap();

        assert_eq!(url.path(), "/v1/candidates");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "3".to_string()),
                ("per_page".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_url_omits_zero_and_absent_pagination() {
        let client = offline_client();

        let url = client
            .candidates_url(&ListCandidatesParams::new().page(0).per_page(0))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.teamtailor.com/v1/candidates");

        let url = client.candidates_url(&ListCandidatesParams::new().per_page(5)).unwrap();
        assert_eq!(url.query(), Some("per_page=5"));
    }

    #[test]
    fn test_list_url_with_filters() {
        let client = offline_client();
        let filter = CandidateFilter {
            created_after: Some("2024-01-01T00:00:00+00:00".to_string()),
            created_before: Some("2024-02-01".to_string()),
            updated_after: Some("2024-03-01".to_string()),
            updated_before: Some("2024-04-01".to_string()),
        };
        let url = client
            .candidates_url(&ListCandidatesParams::new().filter(filter))
            .unwrap();

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                (
                    "filter[created-at][from]".to_string(),
                    "2024-01-01T00:00:00+00:00".to_string()
                ),
                ("filter[created-at][to]".to_string(), "2024-02-01".to_string()),
                ("filter[updated-at][from]".to_string(), "2024-03-01".to_string()),
                ("filter[updated-at][to]".to_string(), "2024-04-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_url_omits_absent_filters() {
        let client = offline_client();
        let filter = CandidateFilter {
            updated_after: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        let url = client
            .candidates_url(&ListCandidatesParams::new().filter(filter))
            .unwrap();

        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["filter[updated-at][from]".to_string()]);
    }

    #[test]
    fn test_candidate_url_interpolates_plain_id() {
        let client = offline_client();
        let url = client.candidate_url(42).unwrap();
        assert_eq!(url.as_str(), "https://api.teamtailor.com/v1/candidates/42");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = TeamtailorClient::new("https://api.teamtailor.com/v1/", TEST_KEY).unwrap();
        let url = client.candidate_url(7).unwrap();
        assert_eq!(url.path(), "/v1/candidates/7");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = TeamtailorClient::new("not a url", TEST_KEY);
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));

        let result = TeamtailorClient::new("mailto:someone@example.com", TEST_KEY);
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug_str = format!("{:?}", offline_client());
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains(TEST_KEY));
    }

    #[tokio::test]
    async fn test_list_candidates_sends_auth_headers() {
        let server = MockServer::start().await;
        let body = r#"{"data": [{"id":"1","type":"candidates","attributes":{"referred":false}}]}"#;

        Mock::given(method("GET"))
            .and(path("/v1/candidates"))
            .and(header("Authorization", "Token token=test-api-key"))
            .and(header("Content-Type", "application/vnd.api+json"))
            .and(header("Accept", "application/vnd.api+json"))
            .and(header("X-Api-Version", "20240404"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let candidates = client_for(&server)
            .list_candidates(&ListCandidatesParams::new().page(1).per_page(10))
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            serde_json::to_value(&candidates).unwrap(),
            serde_json::json!([{"id":"1","type":"candidates","attributes":{"referred":false}}])
        );
    }

    #[tokio::test]
    async fn test_list_candidates_without_params_sends_no_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/candidates"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": []}"#))
            .mount(&server)
            .await;

        let candidates = client_for(&server)
            .list_candidates(&ListCandidatesParams::new())
            .await
            .unwrap();
        assert!(candidates.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_candidate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/candidates/42"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data": {"id":"42","type":"candidates","attributes":{"first-name":"Ada","referred":true}}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let candidate = client_for(&server).get_candidate(42).await.unwrap();
        assert_eq!(candidate.id(), Some("42"));
        let attributes = candidate.attributes().unwrap();
        assert_eq!(attributes.first_name.as_deref(), Some("Ada"));
        assert_eq!(attributes.referred, Some(true));
    }

    #[tokio::test]
    async fn test_list_candidates_returns_records_verbatim() {
        let server = MockServer::start().await;
        let records = serde_json::json!([
            {
                "id": "1",
                "type": "candidates",
                "attributes": { "referred": false, "phone": null, "tags": null }
            },
            {
                "id": "2",
                "type": "candidates",
                "attributes": { "referred": true, "sourced": "yes" }
            },
            { "id": "3", "type": "candidates", "attributes": null }
        ]);

        Mock::given(method("GET"))
            .and(path("/v1/candidates"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(serde_json::json!({ "data": records }).to_string()),
            )
            .mount(&server)
            .await;

        let candidates = client_for(&server)
            .list_candidates(&ListCandidatesParams::new())
            .await
            .unwrap();
        assert_eq!(serde_json::to_value(&candidates).unwrap(), records);
    }

    #[tokio::test]
    async fn test_get_candidate_with_null_attributes() {
        let server = MockServer::start().await;
        let record = serde_json::json!({ "id": "5", "type": "candidates", "attributes": null });

        Mock::given(method("GET"))
            .and(path("/v1/candidates/5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(serde_json::json!({ "data": record }).to_string()),
            )
            .mount(&server)
            .await;

        let candidate = client_for(&server).get_candidate(5).await.unwrap();
        assert_eq!(serde_json::to_value(&candidate).unwrap(), record);
    }

    #[tokio::test]
    async fn test_get_candidate_not_found_is_http_error() {
        let server = MockServer::start().await;
        let body = r#"{"errors":[{"status":"404","title":"Record not found"}]}"#;

        Mock::given(method("GET"))
            .and(path("/v1/candidates/999"))
            .respond_with(ResponseTemplate::new(404).set_body_string(body))
            .mount(&server)
            .await;

        let err = client_for(&server).get_candidate(999).await.unwrap_err();
        match err {
            ApiError::Http { status, body: text } => {
                assert_eq!(status, 404);
                assert_eq!(text, body);
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_is_plain_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_candidates(&ListCandidatesParams::new())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "HTTP 429: slow down");
    }

    #[tokio::test]
    async fn test_non_json_success_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_candidate(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_missing_data_member_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"meta": {}}"#))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_candidates(&ListCandidatesParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = TeamtailorClient::new("http://127.0.0.1:1/v1", TEST_KEY).unwrap();
        let err = client.get_candidate(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    }
}
