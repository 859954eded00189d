//! Storage Module Tests
//!
//! Validates the in-memory store's query semantics and attribute resolution.
//!
//! ## Test Scopes
//! - **Text**: Case-insensitive matching and search-term splitting.
//! - **Queries**: Status, structured filters, full-text search, ordering, pagination.
//! - **Attributes**: Text attribute reads and song reference resolution.
//! - **Seeding**: JSON seed documents, including both song reference forms.

#[cfg(test)]
mod tests {
    use crate::storage::memory::MemoryStore;
    use crate::storage::protocol::{
        AttributeAccessor, AttributeError, GigStore, MetaClause, MetaQuery, StoreError,
        StoreQuery,
    };
    use crate::storage::records::{
        GigAttributes, GigRecord, MetaKey, PostStatus, SongRecord, SongRef,
    };
    use crate::storage::seed::SeedData;
    use crate::storage::text::{SearchTerm, contains_ignore_case, search_terms};
    use std::io::Write;

    fn gig(id: u64, title: &str) -> GigRecord {
        GigRecord {
            id,
            date: format!("2024-01-{:02}T20:00:00", id % 28 + 1),
            slug: format!("gig-{}", id),
            status: PostStatus::Publish,
            title: title.to_string(),
            content: String::new(),
            excerpt: String::new(),
            attributes: GigAttributes::default(),
        }
    }

    fn query(page: u32, per_page: u32) -> StoreQuery {
        StoreQuery {
            status: PostStatus::Publish,
            meta_query: MetaQuery::default(),
            search: None,
            page,
            per_page,
        }
    }

    fn clause(key: MetaKey, value: &str) -> MetaClause {
        MetaClause {
            key,
            value: value.to_string(),
        }
    }

    // ============================================================
    // TEXT TESTS
    // ============================================================

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Blue Note Tokyo", "note"));
        assert!(contains_ignore_case("blue note", "BLUE NOTE"));
        assert!(contains_ignore_case("Zürich", "ZÜR"));
        assert!(!contains_ignore_case("Blue Note", "notes"));
    }

    #[test]
    fn test_search_terms_splits_on_whitespace() {
        let terms = search_terms("  jazz   night ");

        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].text, "jazz");
        assert_eq!(terms[1].text, "night");
        assert!(terms.iter().all(|t| !t.exclude));
    }

    #[test]
    fn test_search_terms_keeps_quoted_phrase() {
        let terms = search_terms(r#""jazz night" live"#);

        assert_eq!(
            terms,
            vec![
                SearchTerm {
                    text: "jazz night".to_string(),
                    exclude: false
                },
                SearchTerm {
                    text: "live".to_string(),
                    exclude: false
                },
            ]
        );
    }

    #[test]
    fn test_search_terms_exclusion_prefix() {
        let terms = search_terms("jazz -fusion");

        assert_eq!(terms[1].text, "fusion");
        assert!(terms[1].exclude);
    }

    #[test]
    fn test_search_terms_empty() {
        assert!(search_terms("").is_empty());
        assert!(search_terms(r#"   "" "#).is_empty());
    }

    // ============================================================
    // QUERY TESTS
    // ============================================================

    #[tokio::test]
    async fn test_query_only_returns_requested_status() {
        let store = MemoryStore::new();
        store.insert_gig(gig(1, "Published"));
        let mut draft = gig(2, "Draft");
        draft.status = PostStatus::Draft;
        store.insert_gig(draft);

        let page = store.query_gigs(&query(1, 10)).await.unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.records[0].id, 1);
    }

    #[tokio::test]
    async fn test_query_meta_clauses_are_anded() {
        let store = MemoryStore::new();
        let mut a = gig(1, "A");
        a.attributes.city = Some("Berlin".to_string());
        a.attributes.country = Some("Germany".to_string());
        let mut b = gig(2, "B");
        b.attributes.city = Some("Berlin".to_string());
        b.attributes.country = Some("USA".to_string());
        store.insert_gig(a);
        store.insert_gig(b);

        let mut q = query(1, 10);
        q.meta_query.clauses = vec![
            clause(MetaKey::City, "berl"),
            clause(MetaKey::Country, "GERMANY"),
        ];
        let page = store.query_gigs(&q).await.unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.records[0].id, 1);
    }

    #[tokio::test]
    async fn test_query_meta_clause_excludes_missing_attribute() {
        let store = MemoryStore::new();
        store.insert_gig(gig(1, "No venue"));

        let mut q = query(1, 10);
        q.meta_query.clauses = vec![clause(MetaKey::VenueName, "a")];
        let page = store.query_gigs(&q).await.unwrap();

        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.records.is_empty());
    }

    #[tokio::test]
    async fn test_query_full_text_covers_title_excerpt_content() {
        let store = MemoryStore::new();
        store.insert_gig(gig(1, "Jazz Night"));
        let mut by_content = gig(2, "Friday");
        by_content.content = "An evening of JAZZ standards".to_string();
        let mut by_excerpt = gig(3, "Saturday");
        by_excerpt.excerpt = "jazz brunch".to_string();
        let mut by_venue = gig(4, "Sunday");
        by_venue.attributes.venue_name = Some("Jazz Cellar".to_string());
        for g in [by_content, by_excerpt, by_venue] {
            store.insert_gig(g);
        }

        let mut q = query(1, 10);
        q.search = Some("jazz".to_string());
        let page = store.query_gigs(&q).await.unwrap();

        let mut ids: Vec<u64> = page.records.iter().map(|g| g.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_query_full_text_requires_every_term() {
        let store = MemoryStore::new();
        store.insert_gig(gig(1, "Jazz Night"));
        store.insert_gig(gig(2, "Jazz Brunch"));
        store.insert_gig(gig(3, "Jazz Fusion Night"));

        let mut q = query(1, 10);
        q.search = Some("jazz night -fusion".to_string());
        let page = store.query_gigs(&q).await.unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.records[0].id, 1);
    }

    #[tokio::test]
    async fn test_query_orders_by_date_then_id_descending() {
        let store = MemoryStore::new();
        let mut old = gig(1, "Old");
        old.date = "2023-06-01T20:00:00".to_string();
        let mut new_a = gig(2, "New A");
        new_a.date = "2024-06-01T20:00:00".to_string();
        let mut new_b = gig(3, "New B");
        new_b.date = "2024-06-01T20:00:00".to_string();
        for g in [old, new_a, new_b] {
            store.insert_gig(g);
        }

        let page = store.query_gigs(&query(1, 10)).await.unwrap();
        let ids: Vec<u64> = page.records.iter().map(|g| g.id).collect();

        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_query_pagination_and_totals() {
        let store = MemoryStore::new();
        for id in 1..=15 {
            store.insert_gig(gig(id, "Gig"));
        }

        let first = store.query_gigs(&query(1, 10)).await.unwrap();
        let second = store.query_gigs(&query(2, 10)).await.unwrap();
        let beyond = store.query_gigs(&query(3, 10)).await.unwrap();

        assert_eq!(first.records.len(), 10);
        assert_eq!(second.records.len(), 5);
        assert!(beyond.records.is_empty());
        for page in [&first, &second, &beyond] {
            assert_eq!(page.total_count, 15);
            assert_eq!(page.total_pages, 2);
        }

        // Pages must not overlap
        assert!(
            second
                .records
                .iter()
                .all(|g| !first.records.iter().any(|f| f.id == g.id))
        );
    }

    #[tokio::test]
    async fn test_query_rejects_zero_page_and_per_page() {
        let store = MemoryStore::new();

        let err = store.query_gigs(&query(0, 10)).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));

        let err = store.query_gigs(&query(1, 0)).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }

    // ============================================================
    // ATTRIBUTE ACCESSOR TESTS
    // ============================================================

    #[tokio::test]
    async fn test_text_attribute_reads_set_and_unset() {
        let store = MemoryStore::new();
        let mut g = gig(1, "Gig");
        g.attributes.city = Some("Lisbon".to_string());
        store.insert_gig(g);

        assert_eq!(
            store.text_attribute(1, MetaKey::City).await.unwrap(),
            Some("Lisbon".to_string())
        );
        assert_eq!(store.text_attribute(1, MetaKey::Country).await.unwrap(), None);
        assert_eq!(
            store.text_attribute(99, MetaKey::City).await.unwrap_err(),
            AttributeError::RecordNotFound(99)
        );
    }

    #[tokio::test]
    async fn test_songs_resolves_ids_and_embedded_records() {
        let store = MemoryStore::new();
        store.insert_song(SongRecord {
            id: 10,
            title: "So What".to_string(),
        });
        let mut g = gig(1, "Gig");
        g.attributes.songs = vec![
            SongRef::Id(10),
            SongRef::Post(SongRecord {
                id: 11,
                title: "Blue in Green".to_string(),
            }),
        ];
        store.insert_gig(g);

        let songs = store.songs(1).await.unwrap();
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();

        assert_eq!(titles, vec!["So What", "Blue in Green"]);
    }

    #[tokio::test]
    async fn test_songs_skip_missing_references() {
        let store = MemoryStore::new();
        store.insert_song(SongRecord {
            id: 10,
            title: "So What".to_string(),
        });
        let mut g = gig(1, "Gig");
        g.attributes.songs = vec![SongRef::Id(404), SongRef::Id(10), SongRef::Id(405)];
        store.insert_gig(g);

        let songs = store.songs(1).await.unwrap();
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();

        assert_eq!(titles, vec!["So What"]);
    }

    #[tokio::test]
    async fn test_songs_unknown_record_fails_lookup() {
        let store = MemoryStore::new();

        let err = store.songs(7).await.unwrap_err();

        assert_eq!(err, AttributeError::RecordNotFound(7));
    }

    // ============================================================
    // SEED TESTS
    // ============================================================

    #[test]
    fn test_seed_accepts_both_song_reference_forms() {
        let json = r#"{
            "songs": [{ "id": 10, "title": "So What" }],
            "gigs": [{
                "id": 1,
                "title": "Kind of Blue Live",
                "acf": {
                    "venue_name": "Village Vanguard",
                    "songs": [10, { "id": 11, "title": "Freddie Freeloader" }]
                }
            }]
        }"#;

        let seed = SeedData::from_json(json).unwrap();
        let gig = &seed.gigs[0];

        assert_eq!(gig.status, PostStatus::Publish);
        assert_eq!(gig.attributes.venue_name.as_deref(), Some("Village Vanguard"));
        assert_eq!(gig.attributes.city, None);
        assert_eq!(gig.attributes.songs[0], SongRef::Id(10));
        assert_eq!(gig.attributes.songs[1].id(), 11);
    }

    #[test]
    fn test_seed_invalid_json_is_an_error() {
        assert!(SeedData::from_json("{ not json").is_err());
    }

    #[tokio::test]
    async fn test_store_from_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "songs": [{{ "id": 5, "title": "Take Five" }}],
                 "gigs": [{{ "id": 1, "title": "Brubeck Tribute", "attributes": {{ "songs": [5] }} }}] }}"#
        )
        .unwrap();

        let store = MemoryStore::from_seed_file(file.path()).unwrap();

        assert_eq!(store.gig_count(), 1);
        assert_eq!(store.song_count(), 1);
        assert_eq!(store.songs(1).await.unwrap()[0].title, "Take Five");
    }

    #[test]
    fn test_store_from_missing_seed_file() {
        let result = MemoryStore::from_seed_file(std::path::Path::new("/nonexistent/gigs.json"));
        assert!(result.is_err());
    }
}
