//! Provider configuration.

/// Default Cover Art Archive endpoint
pub const API_BASE_URL: &str = "https://coverartarchive.org";

/// User agent string - identifies this integration to the archive
pub const USER_AGENT: &str = concat!(
    "coverart-provider/",
    env!("CARGO_PKG_VERSION"),
);

/// Settings for the Cover Art Archive client.
///
/// The defaults point at the public archive; tests override `base_url`
/// to hit a local fixture server.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, no trailing slash
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
