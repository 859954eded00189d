//! Stored Record Types
//!
//! Snapshots of the records held by the store. The search pipeline only ever
//! reads them; nothing in a request mutates a record.

use serde::{Deserialize, Serialize};

/// Identifier shared by gigs and songs.
pub type PostId = u64;

/// Publication state of a record. Only `Publish` is visible to search.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
}

/// The textual attributes of a gig that filters and keyword matching know about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetaKey {
    VenueName,
    City,
    Country,
}

impl MetaKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKey::VenueName => "venue_name",
            MetaKey::City => "city",
            MetaKey::Country => "country",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SongRecord {
    pub id: PostId,
    pub title: String,
}

/// A gig's reference to a song.
///
/// Seed data and older records store either the bare song id or the full
/// song object; both forms are accepted and resolved by the attribute accessor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SongRef {
    Id(PostId),
    Post(SongRecord),
}

impl SongRef {
    pub fn id(&self) -> PostId {
        match self {
            SongRef::Id(id) => *id,
            SongRef::Post(song) => song.id,
        }
    }
}

/// Custom attributes attached to a gig.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GigAttributes {
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub songs: Vec<SongRef>,
}

impl GigAttributes {
    pub fn text(&self, key: MetaKey) -> Option<&str> {
        match key {
            MetaKey::VenueName => self.venue_name.as_deref(),
            MetaKey::City => self.city.as_deref(),
            MetaKey::Country => self.country.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GigRecord {
    pub id: PostId,
    /// Publish date, ISO 8601 (`2024-05-01T20:00:00`). Orders results.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: PostStatus,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, alias = "acf")]
    pub attributes: GigAttributes,
}
