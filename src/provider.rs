//! Image provider - orchestrates the release / release-group lookups
//!
//! The flow exposed to the host:
//! 1. Look up cover art for the item's release id
//! 2. Only if that yields nothing, fall back to the release-group id
//! 3. Map archive image tags onto host image slots
//!
//! Lookup failures (HTTP status, network, malformed body) are absorbed
//! into a warning log and count as "no images there" - they never reach
//! the host. Only cancellation surfaces as an error.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::coverart::{dto, map_release, CoverArtClient};
use crate::error::{Error, Result};
use crate::model::{AlbumIds, ImageSlot, RemoteImageInfo};

/// Name reported on every image record
pub const PROVIDER_NAME: &str = "Cover Art Archive";

/// Trait for Cover Art Archive lookups.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait ReleaseLookup: Send + Sync {
    /// List cover art for a release.
    async fn fetch_release(&self, release_id: &str) -> Result<dto::ReleaseDto>;

    /// List cover art for a release group.
    async fn fetch_release_group(&self, group_id: &str) -> Result<dto::ReleaseDto>;

    /// Fetch an arbitrary image URL as a raw response.
    async fn get_image_response(&self, url: &str) -> Result<reqwest::Response>;
}

#[async_trait]
impl ReleaseLookup for CoverArtClient {
    async fn fetch_release(&self, release_id: &str) -> Result<dto::ReleaseDto> {
        self.fetch_release(release_id).await
    }

    async fn fetch_release_group(&self, group_id: &str) -> Result<dto::ReleaseDto> {
        self.fetch_release_group(group_id).await
    }

    async fn get_image_response(&self, url: &str) -> Result<reqwest::Response> {
        self.get_image_response(url).await
    }
}

/// Which lookup path a request targets
#[derive(Debug, Clone, Copy)]
enum LookupPath {
    Release,
    ReleaseGroup,
}

/// Cover art provider for a host media library.
///
/// Holds no state between calls; every lookup is independent.
pub struct CoverArtProvider<A: ReleaseLookup = CoverArtClient> {
    api: A,
}

impl CoverArtProvider {
    /// Create a provider against the public archive
    pub fn new() -> Self {
        Self {
            api: CoverArtClient::new(),
        }
    }
}

impl Default for CoverArtProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ReleaseLookup> CoverArtProvider<A> {
    /// Create a provider over an existing client
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Image slots this provider can fill
    pub fn supported_images() -> [ImageSlot; 4] {
        [
            ImageSlot::Primary,
            ImageSlot::Box,
            ImageSlot::BoxRear,
            ImageSlot::Disc,
        ]
    }

    /// Look up cover art for an item.
    ///
    /// Tries the release id first; the release-group id is consulted only
    /// when the release path contributed nothing (including when it
    /// failed). Missing identifiers skip their path. Returns
    /// [`Error::Cancelled`] if the token fires while a request is in
    /// flight; the fallback step is not attempted after cancellation.
    pub async fn get_images(
        &self,
        ids: &AlbumIds,
        token: &CancellationToken,
    ) -> Result<Vec<RemoteImageInfo>> {
        let mut list = Vec::new();

        if let Some(release_id) = &ids.release_id {
            list.extend(self.lookup(LookupPath::Release, release_id, token).await?);
        }

        if list.is_empty() {
            if let Some(group_id) = &ids.release_group_id {
                list.extend(
                    self.lookup(LookupPath::ReleaseGroup, group_id, token)
                        .await?,
                );
            }
        }

        Ok(list)
    }

    /// Fetch an arbitrary image URL for the host to stream.
    pub async fn get_image_response(
        &self,
        url: &str,
        token: &CancellationToken,
    ) -> Result<reqwest::Response> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(Error::Cancelled),
            response = self.api.get_image_response(url) => response,
        }
    }

    /// Run one lookup path and map its listing.
    ///
    /// Everything except cancellation degrades to an empty list so the
    /// orchestration above can still try the fallback path.
    async fn lookup(
        &self,
        path: LookupPath,
        id: &str,
        token: &CancellationToken,
    ) -> Result<Vec<RemoteImageInfo>> {
        let fetch = async {
            match path {
                LookupPath::Release => self.api.fetch_release(id).await,
                LookupPath::ReleaseGroup => self.api.fetch_release_group(id).await,
            }
        };

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(Error::Cancelled),
            result = fetch => result,
        };

        match result {
            Ok(release) => Ok(map_release(&release)),
            Err(Error::Cancelled) => Err(Error::Cancelled),
            Err(e) => {
                tracing::warn!("Cover art lookup failed ({:?} {}): {}", path, id, e);
                Ok(Vec::new())
            }
        }
    }
}
