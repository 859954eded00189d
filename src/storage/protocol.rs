//! Storage Protocol
//!
//! The interface the search service consumes from the record store: the
//! query shape, the page it gets back, and the typed attribute accessor.
//!
//! Any backend implementing [`GigStore`] and [`AttributeAccessor`] can sit
//! behind the search service; [`super::memory::MemoryStore`] is the bundled one.

use super::records::{GigRecord, MetaKey, PostId, PostStatus, SongRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// --- Query ---

/// A single structured filter: the attribute must contain `value`,
/// case-insensitively. Records lacking the attribute never match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaClause {
    pub key: MetaKey,
    pub value: String,
}

/// Structured filters combined with logical AND.
///
/// An empty query matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaQuery {
    pub clauses: Vec<MetaClause>,
}

impl MetaQuery {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}

/// One query against the gig collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreQuery {
    pub status: PostStatus,
    pub meta_query: MetaQuery,
    /// Native full-text term over title, excerpt and content.
    pub search: Option<String>,
    /// 1-based.
    pub page: u32,
    pub per_page: u32,
}

/// One page of query results.
///
/// `total_count` and `total_pages` describe the whole filtered set, not just
/// `records`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorePage {
    pub records: Vec<GigRecord>,
    pub total_count: u64,
    pub total_pages: u64,
}

// --- Errors ---

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid query argument: {0}")]
    InvalidArgument(String),
    #[error("storage error: {0}")]
    Backend(String),
}

/// Failure to resolve a record's attribute. Callers treat it as "absent".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttributeError {
    #[error("record {0} not found")]
    RecordNotFound(PostId),
}

// --- Ports ---

#[async_trait]
pub trait GigStore: Send + Sync {
    /// Runs `query` over gig records and returns the requested page.
    async fn query_gigs(&self, query: &StoreQuery) -> Result<StorePage, StoreError>;
}

#[async_trait]
pub trait AttributeAccessor: Send + Sync {
    /// Reads a textual attribute. `Ok(None)` when the record does not set it.
    async fn text_attribute(
        &self,
        record: PostId,
        key: MetaKey,
    ) -> Result<Option<String>, AttributeError>;

    /// Resolves the record's song references to concrete songs, in order.
    /// References to songs that no longer exist are skipped.
    async fn songs(&self, record: PostId) -> Result<Vec<SongRecord>, AttributeError>;
}
