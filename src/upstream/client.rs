//! Upstream API client with timeout and error handling.
//!
//! # Responsibilities
//! - Build the repository-listing URL for an owner
//! - Attach the optional token plus `Accept` and `User-Agent` headers
//! - Bound the call with the configured timeout
//! - Turn non-success statuses into errors carrying the raw body

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{decode_repositories, FetchError, ProjectsError, RepositoryRecord};

/// Media type for the versioned upstream JSON API.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Client for the repository-listing endpoint.
///
/// Built once at startup and shared by every request.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Create a new client.
    pub fn new(config: UpstreamConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::Transport)?;

        if config.token.is_some() {
            tracing::info!("Using upstream token for authentication");
        } else {
            tracing::info!("No upstream token found, using unauthenticated requests (rate limited)");
        }

        Ok(Self { http, config })
    }

    /// Owner whose repositories are listed.
    pub fn owner(&self) -> &str {
        &self.config.owner
    }

    /// Listing URL for `owner`, sorted by last update and capped at one page.
    pub fn listing_url(&self, owner: &str) -> Result<Url, FetchError> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/users/{}/repos", base, owner))?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.config.per_page.to_string());
        Ok(url)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));

        if let Some(token) = &self.config.token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!("Upstream token contains invalid header characters, sending unauthenticated");
                }
            }
        }

        headers
    }

    /// Fetch the raw listing body for `owner`.
    pub async fn fetch_raw(&self, owner: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.listing_url(owner)?;
        let start = Instant::now();

        tracing::debug!(url = %url, "Requesting repository list");

        let result = self.send(url).await;
        metrics::record_upstream_fetch(
            match &result {
                Ok(_) => "success",
                Err(FetchError::Timeout(_)) => "timeout",
                Err(FetchError::Status { .. }) => "status",
                Err(_) => "transport",
            },
            start,
        );
        result
    }

    async fn send(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http
            .get(url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(status = status.as_u16(), body = %body, "Upstream API returned an error");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body.to_vec())
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.config.timeout_secs)
        } else {
            FetchError::Transport(error)
        }
    }

    /// Fetch and decode the repository list for `owner`, in upstream order.
    pub async fn fetch_repositories(&self, owner: &str) -> Result<Vec<RepositoryRecord>, ProjectsError> {
        let body = self.fetch_raw(owner).await?;
        Ok(decode_repositories(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> UpstreamClient {
        UpstreamClient::new(UpstreamConfig {
            token: token.map(String::from),
            ..UpstreamConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_listing_url() {
        let url = client(None).listing_url("jasonschurawel").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/jasonschurawel/repos?sort=updated&per_page=100"
        );
    }

    #[test]
    fn test_listing_url_trims_trailing_slash() {
        let client = UpstreamClient::new(UpstreamConfig {
            base_url: "http://127.0.0.1:9999/".into(),
            ..UpstreamConfig::default()
        })
        .unwrap();
        let url = client.listing_url("octocat").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/users/octocat/repos?sort=updated&per_page=100");
    }

    #[test]
    fn test_headers_without_token() {
        let headers = client(None).headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), ACCEPT_MEDIA_TYPE);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_with_token() {
        let headers = client(Some("secret")).headers();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(auth, "Bearer secret");
        assert!(auth.is_sensitive());
    }

    #[test]
    fn test_token_with_newline_degrades_to_unauthenticated() {
        let headers = client(Some("bad\ntoken")).headers();
        assert!(headers.get(AUTHORIZATION).is_none());
    }
}
