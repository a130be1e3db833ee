use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use std::env;

use super::error::FetchError;
use super::types::Release;

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// The repository that publishes BOSS Console installers.
pub const RELEASES_REPO: &str = "risa-labs-inc/BOSS-Releases";

/// Read-only view of the release feed.
///
/// Both operations perform exactly one outbound call per invocation; there
/// is no retry, timeout or caching behind them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseFeed: Send + Sync {
    /// Fetch the most recent release.
    async fn latest_release(&self) -> Result<Release, FetchError>;

    /// Fetch every release, newest first (feed order).
    async fn all_releases(&self) -> Result<Vec<Release>, FetchError>;
}

/// GitHub-backed implementation of [`ReleaseFeed`].
pub struct GitHubFeed {
    client: Client,
    api_url: String,
}

impl GitHubFeed {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.to_string()));
        }

        response.json::<T>().await.map_err(FetchError::Decode)
    }
}

#[async_trait]
impl ReleaseFeed for GitHubFeed {
    #[tracing::instrument(skip(self))]
    async fn latest_release(&self) -> Result<Release, FetchError> {
        let url = format!("{}/repos/{}/releases/latest", self.api_url, RELEASES_REPO);
        self.get_json(&url).await
    }

    #[tracing::instrument(skip(self))]
    async fn all_releases(&self) -> Result<Vec<Release>, FetchError> {
        let url = format!("{}/repos/{}/releases", self.api_url, RELEASES_REPO);
        self.get_json(&url).await
    }
}

/// Builds the HTTP client used against the feed.
///
/// If the GITHUB_TOKEN environment variable is set it is sent as a bearer
/// token, which lifts the anonymous rate limit.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using GITHUB_TOKEN for authentication");
    }

    let client = Client::builder()
        .user_agent("bossdl-cli")
        .default_headers(headers)
        .build()?;

    Ok(client)
}
