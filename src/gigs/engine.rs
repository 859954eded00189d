use super::error::SearchError;
use super::filter::build_store_query;
use super::matcher::keyword_matches;
use super::shape::ShapeConverter;
use super::types::{FilterRequest, ResultPage};
use crate::storage::protocol::{AttributeAccessor, GigStore};
use std::sync::Arc;

/// Filtered, paginated search over published gigs.
pub struct GigSearch {
    store: Arc<dyn GigStore>,
    attributes: Arc<dyn AttributeAccessor>,
    shaper: Arc<dyn ShapeConverter>,
}

impl GigSearch {
    pub fn new(
        store: Arc<dyn GigStore>,
        attributes: Arc<dyn AttributeAccessor>,
        shaper: Arc<dyn ShapeConverter>,
    ) -> Self {
        Self {
            store,
            attributes,
            shaper,
        }
    }

    /// Runs one search.
    ///
    /// The store applies the structured filters, the full-text keyword and
    /// pagination. When a keyword is present the returned page is filtered
    /// again in memory, and records that fail are dropped without being
    /// replaced. The totals always describe the store query.
    pub async fn search(&self, request: &FilterRequest) -> Result<ResultPage, SearchError> {
        let query = build_store_query(request);
        let page = self.store.query_gigs(&query).await?;
        let fetched = page.records.len();

        let mut items = Vec::with_capacity(fetched);
        for record in &page.records {
            if let Some(keyword) = request.keyword_term()
                && !keyword_matches(self.attributes.as_ref(), record, keyword).await
            {
                tracing::debug!("Keyword {:?} dropped gig {}", keyword, record.id);
                continue;
            }
            items.push(self.shaper.to_public(record));
        }

        tracing::debug!(
            "Gig search: {} filters, page {} x {}, {} fetched, {} returned, {} total",
            query.meta_query.len(),
            query.page,
            query.per_page,
            fetched,
            items.len(),
            page.total_count
        );

        Ok(ResultPage {
            items,
            total_count: page.total_count,
            total_pages: page.total_pages,
        })
    }
}
