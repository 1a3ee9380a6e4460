//! Cover Art Archive API Data Transfer Objects
//!
//! The Cover Art Archive (https://coverartarchive.org) provides album
//! artwork for MusicBrainz releases and release groups. It's a free
//! service with no API key required.
//!
//! API Reference: https://wiki.musicbrainz.org/Cover_Art_Archive/API

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Image classification tags used by the archive.
///
/// https://musicbrainz.org/doc/Cover_Art/Types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Front,
    Back,
    Booklet,
    Medium,
    Tray,
    Obi,
    Spine,
    Track,
    Liner,
    Sticker,
    Poster,
    Watermark,
    Other,
}

/// Explicit tag table. The archive serves capitalized tags ("Front") while
/// its documentation uses lower case; matching is case-insensitive either
/// way. Tags the table doesn't know collapse to `Other` so a new archive
/// tag can never fail a whole release lookup.
const TAG_TABLE: &[(&str, ImageType)] = &[
    ("front", ImageType::Front),
    ("back", ImageType::Back),
    ("booklet", ImageType::Booklet),
    ("medium", ImageType::Medium),
    ("tray", ImageType::Tray),
    ("obi", ImageType::Obi),
    ("spine", ImageType::Spine),
    ("track", ImageType::Track),
    ("liner", ImageType::Liner),
    ("sticker", ImageType::Sticker),
    ("poster", ImageType::Poster),
    ("watermark", ImageType::Watermark),
    ("other", ImageType::Other),
];

impl ImageType {
    /// Parse an archive tag string, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        TAG_TABLE
            .iter()
            .find(|&&(name, _)| tag.eq_ignore_ascii_case(name))
            .map(|&(_, ty)| ty)
            .unwrap_or(Self::Other)
    }

    /// The canonical lower-case tag for this type.
    pub fn as_tag(&self) -> &'static str {
        TAG_TABLE
            .iter()
            .find(|&&(_, ty)| ty == *self)
            .map(|&(name, _)| name)
            .unwrap_or("other")
    }
}

impl<'de> Deserialize<'de> for ImageType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl Serialize for ImageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

/// Cover art listing for a release or release group
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReleaseDto {
    /// URL of the release on MusicBrainz
    #[serde(default)]
    pub release: Option<String>,
    /// Array of images for this release
    #[serde(default)]
    pub images: Vec<ImageDto>,
}

/// A single cover art image
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageDto {
    /// Image type tags (Front, Back, Booklet, etc.)
    #[serde(default)]
    pub types: Vec<ImageType>,
    /// Whether this is the front cover
    #[serde(default)]
    pub front: bool,
    /// Whether this is the back cover
    #[serde(default)]
    pub back: bool,
    /// URL to full-size image
    pub image: String,
    /// Thumbnail URLs
    #[serde(default)]
    pub thumbnails: Option<ThumbnailsDto>,
    /// Comment about the image
    #[serde(default)]
    pub comment: Option<String>,
    /// Whether the archive community approved this image
    #[serde(default)]
    pub approved: bool,
}

/// Available thumbnail sizes
///
/// The archive serves both named keys ("small"/"large") and pixel-size
/// keys ("250"/"500") for the same thumbnails; accept either spelling.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThumbnailsDto {
    /// 250px thumbnail
    #[serde(default, alias = "250")]
    pub small: Option<String>,
    /// 500px thumbnail
    #[serde(default, alias = "500")]
    pub large: Option<String>,
}
