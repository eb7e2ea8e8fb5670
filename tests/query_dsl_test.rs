//! Integration tests composing query builders into full request fragments

use esdsl::prelude::*;
use serde_json::json;

/// Helper building the parent/child tree used across the scenarios
fn blog_tag_query() -> TopChildrenQuery {
    let child = BoolQuery::new()
        .must(&TermQuery::new("tag", "something"))
        .must_not(&TermQuery::new("tag", "spam"));
    TopChildrenQuery::new(&child, "blog_tag")
        .with_score_mode("max")
        .with_factor(5)
        .with_incremental_factor(2)
}

#[test]
fn test_composed_tree_serializes_field_for_field() {
    assert_eq!(
        blog_tag_query().to_value(),
        json!({
            "top_children": {
                "query": {
                    "bool": {
                        "must": [{ "term": { "tag": { "term": "something" } } }],
                        "must_not": [{ "term": { "tag": { "term": "spam" } } }]
                    }
                },
                "type": "blog_tag",
                "score_mode": "max",
                "factor": 5,
                "incremental_factor": 2
            }
        })
    );
}

#[test]
fn test_every_builder_output_passes_the_membership_test() {
    let term = TermQuery::new("user", "kimchy");
    let outputs = vec![
        MatchAllQuery::new().to_value(),
        term.to_value(),
        BoolQuery::new().must(&term).to_value(),
        ConstantScoreQuery::new(&term).to_value(),
        HasChildQuery::new(&term, "comment").to_value(),
        HasParentQuery::new(&term, "blog").to_value(),
        TopChildrenQuery::new(&term, "comment").to_value(),
    ];
    for output in &outputs {
        assert!(is_query(output), "not recognized as a query: {output}");
    }
}

#[test]
fn test_builders_nest_through_the_dynamic_path() {
    // A fragment deserialized from stored JSON feeds back into the family.
    let stored: serde_json::Value =
        serde_json::from_str(r#"{ "term": { "user": { "term": "kimchy" } } }"#).unwrap();

    let query = TopChildrenQuery::from_value(stored.clone(), "comment").unwrap();
    assert_eq!(query.query(), &stored);

    let err = TopChildrenQuery::from_value(json!({ "user": "kimchy" }), "comment").unwrap_err();
    assert!(matches!(err, QueryError::InvalidQuery { .. }));
}

#[test]
fn test_kind_tags_match_wire_keys() {
    let term = TermQuery::new("user", "kimchy");
    assert_eq!(term.kind(), QueryKind::Term);
    assert_eq!(
        TopChildrenQuery::new(&term, "t").kind(),
        QueryKind::TopChildren
    );
    assert_eq!(QueryKind::TopChildren.as_str(), "top_children");
}

#[test]
fn test_serde_and_to_json_agree() {
    let query = blog_tag_query();
    let via_serde: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&query).unwrap()).unwrap();
    let via_to_json: serde_json::Value =
        serde_json::from_str(&query.to_json().unwrap()).unwrap();
    assert_eq!(via_serde, via_to_json);
    assert_eq!(via_serde, query.to_value());
}

#[test]
fn test_repeated_serialization_is_stable() {
    let query = blog_tag_query();
    let first = query.to_json().unwrap();
    let second = query.to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_full_request_round_trip_through_serde() {
    // A realistic request body with the query fragment embedded in it.
    let request = json!({
        "from": 0,
        "size": 10,
        "query": blog_tag_query().to_value()
    });
    let rendered = serde_json::to_string_pretty(&request).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["query"]["top_children"]["type"], json!("blog_tag"));
    assert!(is_query(&parsed["query"]));
}

#[test]
fn test_typo_in_score_mode_does_not_break_the_chain() {
    let query = TopChildrenQuery::new(&MatchAllQuery::new(), "comment")
        .with_score_mode("maximum")
        .with_factor(3);
    assert_eq!(query.score_mode(), None);
    assert_eq!(query.factor(), Some(3));
    assert!(query.to_value()["top_children"]
        .get("score_mode")
        .is_none());
}
