//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::query::QuerySpec;
use crate::test_support::{record, slice_page, ScriptedSource};
use crate::types::Resource;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Envelope Tests
// ============================================================================

#[test]
fn test_envelope_parses_full_body() {
    let body = json!({
        "data": [{"id": "xy1-1"}, {"id": "xy1-2"}],
        "page": 1,
        "pageSize": 250,
        "count": 2,
        "totalCount": 2
    })
    .to_string();

    let page = PageEnvelope::from_body(&body).unwrap().into_page().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 250);
    assert_eq!(page.total_count, Some(2));
}

#[test]
fn test_envelope_total_count_optional() {
    let body = r#"{"data": [], "page": 1, "pageSize": 10}"#;
    let page = PageEnvelope::from_body(body).unwrap().into_page().unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_count, None);
}

#[test]
fn test_envelope_zero_total_is_unknown() {
    let body = r#"{"data": [{"id": "a"}], "page": 1, "pageSize": 10, "totalCount": 0}"#;
    let page = PageEnvelope::from_body(body).unwrap().into_page().unwrap();
    assert_eq!(page.total_count, None);
}

#[test_case(r#"{"page": 1, "pageSize": 10}"# ; "missing data")]
#[test_case(r#"{"data": [], "pageSize": 10}"# ; "missing page")]
#[test_case(r#"{"data": [], "page": 1}"# ; "missing page size")]
#[test_case(r#"{"data": [1, 2], "page": 1, "pageSize": 10}"# ; "non object items")]
#[test_case("<html>oops</html>" ; "not json")]
fn test_envelope_malformed(body: &str) {
    let err = PageEnvelope::from_body(body).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[test]
fn test_envelope_rejects_zero_page_size() {
    let body = r#"{"data": [], "page": 1, "pageSize": 0}"#;
    let err = PageEnvelope::from_body(body).unwrap().into_page().unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

// ============================================================================
// Stop Predicate Tests
// ============================================================================

#[test]
fn test_is_last_page() {
    assert!(is_last_page(1, 250, None));
    assert!(is_last_page(1, 250, Some(0)));
    assert!(is_last_page(1, 250, Some(250)));
    assert!(is_last_page(1, 250, Some(100)));
    assert!(!is_last_page(1, 250, Some(251)));
    assert!(is_last_page(2, 250, Some(500)));
    assert!(!is_last_page(2, 250, Some(501)));
}

#[test]
fn test_pagination_state() {
    let state = PaginationState::default();
    assert_eq!(state, PaginationState::Fetching { page: 1 });
    assert!(!state.is_done());
    assert!(PaginationState::Done.is_done());
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[test_case(0, 250, 1 ; "empty result")]
#[test_case(1, 250, 1 ; "single item")]
#[test_case(250, 250, 1 ; "exactly one page")]
#[test_case(251, 250, 2 ; "one over")]
#[test_case(500, 250, 2 ; "exactly two pages")]
#[test_case(1000, 100, 10 ; "ten pages")]
#[test_case(7, 3, 3 ; "small remainder")]
#[tokio::test]
async fn test_pages_fetched_is_ceil(total: u64, page_size: u32, expected_pages: u32) {
    let source = ScriptedSource::paged(total, page_size);
    let paginator = Paginator::new(&source, Resource::Cards, QuerySpec::new(1, page_size));

    let records = paginator.collect_all().await.unwrap();

    assert_eq!(records.len() as u64, total);
    assert_eq!(
        source.pages_requested(),
        (1..=expected_pages).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_preserves_page_then_item_order() {
    let page_size = 4;
    let source = ScriptedSource::paged(10, page_size);
    let records = Paginator::new(&source, Resource::Cards, QuerySpec::new(1, page_size))
        .collect_all()
        .await
        .unwrap();

    for (position, rec) in records.iter().enumerate() {
        let page = position / page_size as usize + 1;
        let index = position % page_size as usize;
        let expected = slice_page(10, page_size, page as u32, Some(10)).items[index].clone();
        assert_eq!(rec, &expected);
    }
}

#[tokio::test]
async fn test_absent_total_stops_after_one_page() {
    let source = ScriptedSource::new(|_, query| {
        Ok(Page {
            items: (0..250).map(|n| record(&format!("c-{n}"))).collect(),
            page: query.page,
            page_size: 250,
            total_count: None,
        })
    });

    let records = Paginator::new(&source, Resource::Cards, QuerySpec::new(1, 250))
        .collect_all()
        .await
        .unwrap();

    assert_eq!(records.len(), 250);
    assert_eq!(source.pages_requested(), vec![1]);
}

#[tokio::test]
async fn test_failure_on_middle_page_discards_everything() {
    let source = ScriptedSource::new(|_, query| {
        if query.page == 2 {
            Err(crate::test_support::server_error("http://x/cards?page=2"))
        } else {
            Ok(slice_page(30, 10, query.page, Some(30)))
        }
    });

    let result = Paginator::new(&source, Resource::Cards, QuerySpec::new(1, 10))
        .collect_all()
        .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
    assert_eq!(source.pages_requested(), vec![1, 2]);
}

#[tokio::test]
async fn test_next_page_after_error_is_done() {
    let source = ScriptedSource::new(|_, _| Err(Error::decode("broken")));
    let mut paginator = Paginator::new(&source, Resource::Sets, QuerySpec::new(1, 10));

    assert!(paginator.next_page().await.is_err());
    assert!(paginator.state().is_done());
    assert!(paginator.next_page().await.unwrap().is_none());
    assert_eq!(source.requests().len(), 1);
}

#[tokio::test]
async fn test_query_is_carried_to_every_page() {
    let source = ScriptedSource::paged(5, 2);
    let query = QuerySpec::new(9, 2)
        .raw_filter("supertype:Energy")
        .select(["id"]);

    Paginator::new(&source, Resource::Sets, query)
        .collect_all()
        .await
        .unwrap();

    let requests = source.requests();
    assert_eq!(requests.len(), 3);
    for (i, (resource, query)) in requests.iter().enumerate() {
        assert_eq!(*resource, Resource::Sets);
        assert_eq!(query.page, i as u32 + 1);
        assert_eq!(query.filter.as_deref(), Some("supertype:Energy"));
        assert_eq!(query.select, vec!["id".to_string()]);
    }
}

#[tokio::test]
async fn test_counters_track_progress() {
    let source = ScriptedSource::paged(25, 10);
    let mut paginator = Paginator::new(&source, Resource::Cards, QuerySpec::new(1, 10));

    let first = paginator.next_page().await.unwrap().unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(paginator.state(), PaginationState::Fetching { page: 2 });

    while paginator.next_page().await.unwrap().is_some() {}

    assert_eq!(paginator.pages_fetched(), 3);
    assert_eq!(paginator.records_fetched(), 25);
}

#[tokio::test]
async fn test_stream_yields_pages_lazily() {
    let source = ScriptedSource::paged(600, 250);
    let pages: Vec<Page> = Paginator::new(&source, Resource::Cards, QuerySpec::new(1, 250))
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2].len(), 100);
    assert_eq!(source.pages_requested(), vec![1, 2, 3]);
}
