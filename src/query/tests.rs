//! Tests for query module

use super::*;
use pretty_assertions::assert_eq;

// ============================================================================
// Filter Tests
// ============================================================================

#[test]
fn test_filter_empty() {
    let filter = Filter::new();
    assert!(filter.is_empty());
    assert_eq!(filter.to_string(), "");
}

#[test]
fn test_filter_joins_with_commas() {
    let filter = Filter::new().eq("name", "charizard").eq("hp", "120");
    assert_eq!(filter.to_string(), "name:charizard,hp:120");
    assert_eq!(filter.predicates().len(), 2);
}

#[test]
fn test_filter_quoted_value() {
    let filter = Filter::new().quoted("subtypes", "Stage 1");
    assert_eq!(filter.to_string(), "subtypes:\"Stage 1\"");
}

#[test]
fn test_filter_from_pairs_keeps_order() {
    let filter = Filter::from_pairs([("types", "Fire"), ("rarity", "Rare")]);
    assert_eq!(filter.to_string(), "types:Fire,rarity:Rare");
}

// ============================================================================
// QuerySpec Tests
// ============================================================================

#[test]
fn test_query_minimal() {
    let spec = QuerySpec::new(1, 250);
    assert_eq!(spec.to_query_string(), "page=1&pageSize=250");
}

#[test]
fn test_query_full_order() {
    let spec = QuerySpec::new(2, 100)
        .filter(&Filter::new().eq("name", "pikachu"))
        .order_by(["set.releaseDate", "number"])
        .select(["id", "name"]);

    assert_eq!(
        spec.to_query_string(),
        "page=2&pageSize=100&q=name:pikachu&orderBy=set.releaseDate,number&select=id,name"
    );
}

#[test]
fn test_query_omits_empty_lists_by_default() {
    let spec = QuerySpec::new(1, 10).select(["id"]);
    assert_eq!(spec.to_query_string(), "page=1&pageSize=10&select=id");
}

#[test]
fn test_query_send_policy_keeps_empty_lists() {
    let spec = QuerySpec::new(1, 10).empty_params(EmptyParams::Send);
    assert_eq!(
        spec.to_query_string(),
        "page=1&pageSize=10&orderBy=&select="
    );
}

#[test]
fn test_query_empty_filter_is_omitted() {
    let spec = QuerySpec::new(1, 10).raw_filter("");
    assert!(spec.filter.is_none());

    let spec = QuerySpec::new(1, 10).filter(&Filter::new());
    assert_eq!(spec.to_query_string(), "page=1&pageSize=10");
}

#[test]
fn test_query_does_not_encode() {
    let spec = QuerySpec::new(1, 5).filter(&Filter::new().quoted("rarity", "Rare Holo"));
    assert_eq!(
        spec.to_query_string(),
        "page=1&pageSize=5&q=rarity:\"Rare Holo\""
    );
}

#[test]
fn test_for_page_changes_only_page() {
    let spec = QuerySpec::new(1, 50).raw_filter("set.id:base1").select(["id"]);
    let next = spec.for_page(3);

    assert_eq!(next.page, 3);
    assert_eq!(next.page_size, 50);
    assert_eq!(next.filter, spec.filter);
    assert_eq!(next.select, spec.select);
}

#[test]
fn test_select_suffix() {
    assert_eq!(select_suffix(&[]), "");
    assert_eq!(
        select_suffix(&["id".to_string(), "name".to_string()]),
        "?select=id,name"
    );
}
