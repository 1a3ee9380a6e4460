//! Cover Art Archive image provider.
//!
//! Fetches album cover art metadata from the Cover Art Archive
//! (<https://coverartarchive.org>) and maps it onto a host media
//! library's image slots. Lookup order: the item's MusicBrainz release
//! id first, then its release-group id if the release yielded nothing.
//!
//! # Example
//!
//! ```ignore
//! use coverart_provider::{AlbumIds, CoverArtProvider};
//! use tokio_util::sync::CancellationToken;
//!
//! let provider = CoverArtProvider::new();
//! let ids = AlbumIds::new(Some("76df3287-6cda-33eb-8e9a-044b5e15ffdd".into()), None);
//! let images = provider.get_images(&ids, &CancellationToken::new()).await?;
//! ```

pub mod config;
pub mod coverart;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{AlbumIds, ImageSlot, RatingType, RemoteImageInfo};
pub use provider::{CoverArtProvider, ReleaseLookup, PROVIDER_NAME};
