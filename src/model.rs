//! Host-facing domain models.
//!
//! These types are OUR types - they don't change when the archive's API
//! changes. Wire responses get converted into these via the mapper.

/// Slot in the host's artwork taxonomy that an image targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// Main display artwork
    Primary,
    /// Box / case front
    Box,
    /// Box / case rear
    BoxRear,
    /// Disc face
    Disc,
}

/// How the host should interpret `community_rating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingType {
    /// Absolute score, not a vote tally
    Score,
}

/// A remote image offered to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteImageInfo {
    /// Name of the providing service
    pub provider_name: &'static str,
    /// Full-size image URL
    pub url: String,
    /// Target slot in the host taxonomy
    pub image_type: ImageSlot,
    /// Preferred thumbnail URL, if the archive offers one
    pub thumbnail_url: Option<String>,
    /// 1.0 if the archive community approved the image, else 0.0
    pub community_rating: f32,
    /// Interpretation of `community_rating`
    pub rating_type: RatingType,
}

/// External identifiers extracted from a library item.
///
/// Empty strings are treated the same as absent identifiers; the
/// constructors normalize them to `None` so the lookup paths only ever
/// see usable ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumIds {
    /// MusicBrainz release id
    pub release_id: Option<String>,
    /// MusicBrainz release-group id
    pub release_group_id: Option<String>,
}

impl AlbumIds {
    pub fn new(release_id: Option<String>, release_group_id: Option<String>) -> Self {
        Self {
            release_id: release_id.filter(|id| !id.is_empty()),
            release_group_id: release_group_id.filter(|id| !id.is_empty()),
        }
    }

    /// No identifier is available; every lookup path will be skipped.
    pub fn is_empty(&self) -> bool {
        self.release_id.is_none() && self.release_group_id.is_none()
    }
}
