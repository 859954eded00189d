use crate::storage::records::{PostId, PostStatus};
use serde::{Deserialize, Serialize};

/// Query-string parameters exactly as received.
///
/// Everything stays a string so malformed numbers can be coerced instead of
/// rejected; see `FilterRequest::from_params`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GigSearchParams {
    pub venue_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// A normalized search request. Build one with `FilterRequest::from_params`
/// or start from `FilterRequest::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    pub venue_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub keyword: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rendered {
    pub rendered: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedContent {
    pub rendered: String,
    pub protected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShapedAttributes {
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub songs: Vec<PostId>,
}

/// Public representation of a gig, as returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShapedGig {
    pub id: PostId,
    pub date: String,
    pub slug: String,
    pub status: PostStatus,
    #[serde(rename = "type")]
    pub post_type: String,
    pub link: String,
    pub title: Rendered,
    pub content: RenderedContent,
    pub excerpt: RenderedContent,
    pub acf: ShapedAttributes,
}

/// One page of search results.
///
/// `total_count` and `total_pages` come from the store query and are not
/// adjusted when the keyword pass drops records, so `items` may be shorter
/// than the counts imply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub items: Vec<ShapedGig>,
    pub total_count: u64,
    pub total_pages: u64,
}
