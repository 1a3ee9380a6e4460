//! Cover Art Archive HTTP client
//!
//! One GET per lookup, no retries, no caching. No API key required,
//! but please respect their rate limits.
//!
//! API: https://coverartarchive.org

use super::dto;
use crate::config::Config;
use crate::error::{Error, Result};

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    config: Config,
}

impl CoverArtClient {
    /// Create a client against the public archive
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a client with explicit settings
    pub fn with_config(config: Config) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            config,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_config(Config {
            base_url: base_url.into(),
            ..Config::default()
        })
    }

    /// List the cover art for a MusicBrainz release
    pub async fn fetch_release(&self, release_id: &str) -> Result<dto::ReleaseDto> {
        let url = format!(
            "{}/release/{}/",
            self.config.base_url,
            urlencoding::encode(release_id)
        );
        self.fetch_listing(&url).await
    }

    /// List the cover art for a MusicBrainz release group
    pub async fn fetch_release_group(&self, group_id: &str) -> Result<dto::ReleaseDto> {
        let url = format!(
            "{}/release-group/{}/",
            self.config.base_url,
            urlencoding::encode(group_id)
        );
        self.fetch_listing(&url).await
    }

    /// Fetch an arbitrary image URL and hand the raw response back for
    /// the host to stream. No transformation, status passed through.
    pub async fn get_image_response(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!("get_image_response({})", url);
        self.http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))
    }

    /// Send the listing request and parse the response
    async fn fetch_listing(&self, url: &str) -> Result<dto::ReleaseDto> {
        tracing::debug!("fetch_listing({})", url);

        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<dto::ReleaseDto>()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }
}

impl Default for CoverArtClient {
    fn default() -> Self {
        Self::new()
    }
}
