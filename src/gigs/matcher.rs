use crate::storage::protocol::AttributeAccessor;
use crate::storage::records::{GigRecord, MetaKey};
use crate::storage::text::contains_ignore_case;

/// Attributes checked by the keyword pass, in evaluation order.
pub const KEYWORD_ATTRIBUTES: [MetaKey; 3] = [MetaKey::VenueName, MetaKey::City, MetaKey::Country];

/// Decides whether `record` survives the keyword pass.
///
/// Checks venue, city, country, related song titles, then the record's own
/// title and content, stopping at the first hit. A failed lookup counts as
/// no match for that field only.
pub async fn keyword_matches(
    accessor: &dyn AttributeAccessor,
    record: &GigRecord,
    keyword: &str,
) -> bool {
    for key in KEYWORD_ATTRIBUTES {
        match accessor.text_attribute(record.id, key).await {
            Ok(Some(value)) if contains_ignore_case(&value, keyword) => return true,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("Ignoring {} of gig {}: {}", key.as_str(), record.id, e);
            }
        }
    }

    match accessor.songs(record.id).await {
        Ok(songs) => {
            if songs
                .iter()
                .any(|song| contains_ignore_case(&song.title, keyword))
            {
                return true;
            }
        }
        Err(e) => {
            tracing::debug!("Treating gig {} as having no songs: {}", record.id, e);
        }
    }

    contains_ignore_case(&record.title, keyword) || contains_ignore_case(&record.content, keyword)
}
