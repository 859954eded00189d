//! Request coercion and store query construction.

use super::types::{FilterRequest, GigSearchParams};
use crate::storage::protocol::{MetaClause, MetaQuery, StoreQuery};
use crate::storage::records::{MetaKey, PostStatus};
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").expect("numeric prefix pattern is valid")
});

pub const DEFAULT_PAGE: u32 = 1;

/// Lower bound for `per_page`, and also its default.
///
/// Requests below it are raised to it; there is no upper bound. This is
/// almost certainly meant to be a default rather than a floor, but clients
/// depend on the current behaviour.
pub const MIN_PER_PAGE: u32 = 10;

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            venue_name: None,
            country: None,
            city: None,
            keyword: None,
            page: DEFAULT_PAGE,
            per_page: MIN_PER_PAGE,
        }
    }
}

impl FilterRequest {
    /// Coerces raw query parameters. Never fails: unreadable numbers fall
    /// back to their minimums.
    pub fn from_params(params: GigSearchParams) -> Self {
        let keyword = params
            .keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !is_blank(k));

        Self {
            venue_name: non_empty(params.venue_name),
            country: non_empty(params.country),
            city: non_empty(params.city),
            keyword,
            page: clamp_at_least(params.page.as_deref(), DEFAULT_PAGE),
            per_page: clamp_at_least(params.per_page.as_deref(), MIN_PER_PAGE),
        }
    }

    /// The trimmed keyword, or `None` when it is absent or blank.
    pub fn keyword_term(&self) -> Option<&str> {
        self.keyword.as_deref().map(str::trim).filter(|k| !is_blank(k))
    }
}

impl GigSearchParams {
    /// Collects raw query pairs. A repeated key keeps its last value and
    /// unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |mut params, (key, value)| {
                let slot = match key.as_str() {
                    "venue_name" => &mut params.venue_name,
                    "country" => &mut params.country,
                    "city" => &mut params.city,
                    "keyword" => &mut params.keyword,
                    "page" => &mut params.page,
                    "per_page" => &mut params.per_page,
                    _ => return params,
                };
                *slot = Some(value);
                params
            })
    }
}

/// `""` and `"0"` both count as "not given", for filters and keyword alike.
pub fn is_blank(value: &str) -> bool {
    value.is_empty() || value == "0"
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

fn clamp_at_least(raw: Option<&str>, min: u32) -> u32 {
    let value = raw.map(leading_int).unwrap_or(0).max(i64::from(min));
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Reads the leading number of `raw` and truncates it to an integer.
///
/// Leading whitespace is skipped. `"12abc"` is 12, `"2.9"` is 2, `"1e3"` is
/// 1000, `"abc"` and `""` are 0. Values past the `i64` range saturate.
pub fn leading_int(raw: &str) -> i64 {
    let Some(number) = NUMERIC_PREFIX.find(raw.trim_start()) else {
        return 0;
    };
    let number = number.as_str();

    if number.contains(['.', 'e', 'E']) {
        // `as` saturates out-of-range floats
        return number.parse::<f64>().map(|f| f as i64).unwrap_or(0);
    }

    let (negative, digits) = match number.as_bytes()[0] {
        b'-' => (true, &number[1..]),
        b'+' => (false, &number[1..]),
        _ => (false, number),
    };

    let magnitude = digits.bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });

    if negative { -magnitude } else { magnitude }
}

/// Adds a LIKE clause for `key` when `value` is present and not blank.
///
/// Takes the accumulator by value and hands it back, so building a query is
/// a plain fold with no shared state.
pub fn with_like_clause(mut acc: MetaQuery, key: MetaKey, value: Option<&str>) -> MetaQuery {
    if let Some(value) = value.filter(|v| !is_blank(v)) {
        acc.clauses.push(MetaClause {
            key,
            value: value.to_string(),
        });
    }
    acc
}

/// Builds the single store query for `request`: published gigs, the
/// structured filters ANDed, and the keyword as the native full-text term.
pub fn build_store_query(request: &FilterRequest) -> StoreQuery {
    let meta_query = [
        (MetaKey::VenueName, request.venue_name.as_deref()),
        (MetaKey::Country, request.country.as_deref()),
        (MetaKey::City, request.city.as_deref()),
    ]
    .into_iter()
    .fold(MetaQuery::default(), |acc, (key, value)| {
        with_like_clause(acc, key, value)
    });

    StoreQuery {
        status: PostStatus::Publish,
        meta_query,
        search: request.keyword_term().map(str::to_string),
        page: request.page.max(DEFAULT_PAGE),
        per_page: request.per_page.max(MIN_PER_PAGE),
    }
}
