//! Seed Loading
//!
//! Populates a [`MemoryStore`] from a JSON document of the form
//! `{ "songs": [...], "gigs": [...] }`.

use super::memory::MemoryStore;
use super::records::{GigRecord, SongRecord};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub songs: Vec<SongRecord>,
    #[serde(default)]
    pub gigs: Vec<GigRecord>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Seed data is not valid JSON")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Inserts every song and gig into `store`, replacing records with the same id.
    pub fn apply(self, store: &MemoryStore) {
        let (songs, gigs) = (self.songs.len(), self.gigs.len());
        for song in self.songs {
            store.insert_song(song);
        }
        for gig in self.gigs {
            store.insert_gig(gig);
        }
        tracing::info!("Seeded store with {} gigs and {} songs", gigs, songs);
    }
}

impl MemoryStore {
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let store = MemoryStore::new();
        SeedData::from_path(path)?.apply(&store);
        Ok(store)
    }
}
