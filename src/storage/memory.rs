use super::protocol::*;
use super::records::{GigRecord, MetaKey, PostId, SongRecord, SongRef};
use super::text::{SearchTerm, contains_ignore_case, search_terms};

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory gig and song store.
///
/// Cloning is cheap and clones share the same data, so one instance can back
/// both the [`GigStore`] and the [`AttributeAccessor`] seams.
#[derive(Clone, Default)]
pub struct MemoryStore {
    gigs: Arc<DashMap<PostId, GigRecord>>,
    songs: Arc<DashMap<PostId, SongRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_gig(&self, gig: GigRecord) {
        self.gigs.insert(gig.id, gig);
    }

    pub fn insert_song(&self, song: SongRecord) {
        self.songs.insert(song.id, song);
    }

    pub fn gig_count(&self) -> usize {
        self.gigs.len()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Resolves one reference; a bare id with no stored song yields `None`.
    fn resolve_song(&self, record: PostId, song: &SongRef) -> Option<SongRecord> {
        match song {
            SongRef::Post(song) => Some(song.clone()),
            SongRef::Id(id) => {
                let resolved = self.songs.get(id).map(|entry| entry.value().clone());
                if resolved.is_none() {
                    tracing::debug!("Gig {} references missing song {}, skipping", record, id);
                }
                resolved
            }
        }
    }
}

fn matches_meta(gig: &GigRecord, meta_query: &MetaQuery) -> bool {
    meta_query.clauses.iter().all(|clause| {
        gig.attributes
            .text(clause.key)
            .is_some_and(|value| contains_ignore_case(value, &clause.value))
    })
}

fn matches_search(gig: &GigRecord, terms: &[SearchTerm]) -> bool {
    terms.iter().all(|term| {
        let found = [&gig.title, &gig.excerpt, &gig.content]
            .iter()
            .any(|field| contains_ignore_case(field, &term.text));
        found != term.exclude
    })
}

#[async_trait]
impl GigStore for MemoryStore {
    async fn query_gigs(&self, query: &StoreQuery) -> Result<StorePage, StoreError> {
        if query.page == 0 {
            return Err(StoreError::InvalidArgument("page must be at least 1".to_string()));
        }
        if query.per_page == 0 {
            return Err(StoreError::InvalidArgument(
                "per_page must be at least 1".to_string(),
            ));
        }

        let terms = query.search.as_deref().map(search_terms).unwrap_or_default();

        let mut matching: Vec<GigRecord> = self
            .gigs
            .iter()
            .filter(|entry| {
                let gig = entry.value();
                gig.status == query.status
                    && matches_meta(gig, &query.meta_query)
                    && matches_search(gig, &terms)
            })
            .map(|entry| entry.value().clone())
            .collect();

        matching.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));

        let total_count = matching.len() as u64;
        let per_page = u64::from(query.per_page);
        let total_pages = total_count.div_ceil(per_page);
        let offset = u64::from(query.page - 1).saturating_mul(per_page);

        let records: Vec<GigRecord> = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(query.per_page as usize)
            .collect();

        tracing::debug!(
            "Store query matched {} gigs, returning {} (page {}/{})",
            total_count,
            records.len(),
            query.page,
            total_pages
        );

        Ok(StorePage {
            records,
            total_count,
            total_pages,
        })
    }
}

#[async_trait]
impl AttributeAccessor for MemoryStore {
    async fn text_attribute(
        &self,
        record: PostId,
        key: MetaKey,
    ) -> Result<Option<String>, AttributeError> {
        let gig = self
            .gigs
            .get(&record)
            .ok_or(AttributeError::RecordNotFound(record))?;
        Ok(gig.attributes.text(key).map(str::to_string))
    }

    async fn songs(&self, record: PostId) -> Result<Vec<SongRecord>, AttributeError> {
        let refs = self
            .gigs
            .get(&record)
            .map(|gig| gig.attributes.songs.clone())
            .ok_or(AttributeError::RecordNotFound(record))?;

        Ok(refs
            .iter()
            .filter_map(|song| self.resolve_song(record, song))
            .collect())
    }
}
