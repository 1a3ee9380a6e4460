//! Provider error types.
//!
//! Nothing in this crate is fatal to a host process: HTTP and parse
//! failures are absorbed at the provider boundary and degrade to
//! "no cover art found". The variants here exist so the client and
//! orchestrator layers can tell those failure classes apart before
//! absorbing them.

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to the Cover Art Archive.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Connection-level failure (DNS, refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the archive
    #[error("HTTP {status}: {url}")]
    HttpStatus { status: u16, url: String },

    /// Response body did not deserialize as expected
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The host cancelled the lookup
    #[error("Lookup cancelled")]
    Cancelled,
}

impl Error {
    /// True for the one variant the provider surfaces to the host.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
