use super::engine::GigSearch;
use super::error::SearchError;
use super::types::{FilterRequest, GigSearchParams, ShapedGig};
use axum::extract::Query;
use axum::http::header::ACCESS_CONTROL_EXPOSE_HEADERS;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::{Extension, Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Public endpoint for filtered gig listings.
pub const ENDPOINT_GIGS: &str = "/custom/v1/gigs";

/// Total matches of the store query, before the keyword pass.
pub const TOTAL_HEADER: HeaderName = HeaderName::from_static("x-wp-total");
/// Total pages of the store query, before the keyword pass.
pub const TOTAL_PAGES_HEADER: HeaderName = HeaderName::from_static("x-wp-totalpages");

const EXPOSED_HEADERS: &str = "X-WP-Total, X-WP-TotalPages";

/// Routes for the gig search API.
///
/// Every gigs response advertises the pagination headers to browsers,
/// whether or not the request was cross-origin.
pub fn router(search: Arc<GigSearch>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route(ENDPOINT_GIGS, get(handle_filtered_gigs))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_EXPOSE_HEADERS,
            HeaderValue::from_static(EXPOSED_HEADERS),
        ))
        .layer(cors)
        .layer(Extension(search))
}

/// Query pairs are taken raw so a repeated key resolves to its last value
/// instead of failing extraction.
pub async fn handle_filtered_gigs(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(search): Extension<Arc<GigSearch>>,
) -> Result<([(HeaderName, String); 2], Json<Vec<ShapedGig>>), SearchError> {
    let request = FilterRequest::from_params(GigSearchParams::from_pairs(pairs));

    let page = search.search(&request).await.map_err(|e| {
        tracing::error!("Gig search failed: {}", e);
        e
    })?;

    Ok((
        [
            (TOTAL_HEADER, page.total_count.to_string()),
            (TOTAL_PAGES_HEADER, page.total_pages.to_string()),
        ],
        Json(page.items),
    ))
}
