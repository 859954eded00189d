//! Gig Search Module
//!
//! Filtered, paginated search over published gig listings.
//!
//! ## Pipeline
//! 1. **Coercion**: Raw query parameters become a `FilterRequest`; bad numbers
//!    are clamped, never rejected.
//! 2. **Store query**: Venue, country and city become ANDed substring filters;
//!    the keyword becomes the store's full-text term.
//! 3. **Keyword pass**: With a keyword, each returned gig must also match on
//!    venue, city, country, a song title, its title or its content.
//! 4. **Shaping**: Surviving gigs are converted to their public form.
//!
//! Pagination headers report the store query's totals. They are not
//! recomputed after the keyword pass, so a page can hold fewer items than
//! the totals suggest.
//!
//! ## Submodules
//! - **`engine`**: The `GigSearch` service.
//! - **`filter`**: Request coercion and the pure query builder.
//! - **`matcher`**: The in-memory keyword pass.
//! - **`shape`**: Record-to-response conversion.
//! - **`handlers`**: Axum router and HTTP handler.
//! - **`error`**: Error types and their HTTP mapping.
//! - **`types`**: Request and response DTOs.

pub mod engine;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod matcher;
pub mod shape;
pub mod types;
