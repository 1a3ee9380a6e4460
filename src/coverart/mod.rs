//! Cover Art Archive integration
//!
//! Fetches album artwork listings from coverartarchive.org using
//! MusicBrainz release and release-group IDs. No API key required.

pub mod dto;
mod client;
mod mapper;

pub use client::CoverArtClient;
pub use mapper::map_release;
