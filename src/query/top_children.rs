//! Top children query builder

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::envelope::Envelope;
use super::kind::{check_query_value, QueryKind};
use super::score::{self, ScoreMode};
use super::Query;
use crate::error::Result;

/// Runs the child query with an estimated hits size and aggregates the
/// matching child documents into their parent documents. If too few parents
/// match the requested search window, the engine reruns the child query with
/// a wider factor.
///
/// Child scores fold into the parent score according to [`ScoreMode`].
#[derive(Debug, Clone)]
pub struct TopChildrenQuery {
    envelope: Envelope,

    /// Embedded snapshot of the child query. Never absent.
    query: Value,

    /// Child document type the query executes against
    doc_type: String,

    /// Legacy scoring key, still read by older engine versions
    score: Option<ScoreMode>,

    score_mode: Option<ScoreMode>,

    factor: Option<i64>,

    incremental_factor: Option<i64>,
}

impl TopChildrenQuery {
    /// Create a top children query running `query` against child documents
    /// of `doc_type`.
    ///
    /// The child query is embedded as a serialized snapshot; `doc_type` is
    /// stored verbatim (an empty string is accepted).
    pub fn new(query: &dyn Query, doc_type: impl Into<String>) -> Self {
        Self::from_snapshot(query.to_value(), doc_type.into())
    }

    /// Create a top children query from an already-serialized child query
    /// fragment.
    ///
    /// Fails with [`QueryError::InvalidQuery`](crate::QueryError::InvalidQuery)
    /// when `query` is not the single-key envelope of a recognized query
    /// type.
    pub fn from_value(query: Value, doc_type: impl Into<String>) -> Result<Self> {
        Ok(Self::from_snapshot(check_query_value(query)?, doc_type.into()))
    }

    fn from_snapshot(query: Value, doc_type: String) -> Self {
        Self {
            envelope: Envelope::new(QueryKind::TopChildren),
            query,
            doc_type,
            score: None,
            score_mode: None,
            factor: None,
            incremental_factor: None,
        }
    }

    /// Replace the embedded child query with a snapshot of `query`.
    pub fn with_query(mut self, query: &dyn Query) -> Self {
        self.query = query.to_value();
        self
    }

    /// Replace the embedded child query with an already-serialized fragment.
    ///
    /// Fails with [`QueryError::InvalidQuery`](crate::QueryError::InvalidQuery)
    /// when `query` is not a recognized query fragment; the previous
    /// snapshot is dropped with the builder in that case.
    pub fn with_query_value(mut self, query: Value) -> Result<Self> {
        self.query = check_query_value(query)?;
        Ok(self)
    }

    /// The embedded child query snapshot
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Set the child document type to search against. Stored verbatim, no
    /// validation.
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    /// The child document type
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Set the legacy `score` key. Valid values are `max`, `sum`, `avg` and
    /// `total`, matched case-insensitively; anything else is discarded and
    /// the previous value kept.
    #[deprecated(note = "use `with_score_mode`")]
    pub fn with_score(mut self, score: &str) -> Self {
        if let Some(mode) = score::parse_or_discard(score) {
            self.score = Some(mode);
        }
        self
    }

    /// The legacy `score` key, if set
    pub fn score(&self) -> Option<ScoreMode> {
        self.score
    }

    /// Set the score mode. Valid values are `max`, `sum`, `avg` and `total`,
    /// matched case-insensitively; anything else is discarded and the
    /// previous value kept.
    pub fn with_score_mode(mut self, score_mode: &str) -> Self {
        if let Some(mode) = score::parse_or_discard(score_mode) {
            self.score_mode = Some(mode);
        }
        self
    }

    /// The score mode, if set
    pub fn score_mode(&self) -> Option<ScoreMode> {
        self.score_mode
    }

    /// Set the number of hits asked for in the child query. The engine
    /// defaults to 5. Stored verbatim; out-of-range values are the engine's
    /// to reject.
    pub fn with_factor(mut self, factor: i64) -> Self {
        self.factor = Some(factor);
        self
    }

    /// The child hits factor, if set
    pub fn factor(&self) -> Option<i64> {
        self.factor
    }

    /// Set the multiplier applied to `factor` when too few child documents
    /// come back and the query is rerun. The engine defaults to 5. Stored
    /// verbatim.
    pub fn with_incremental_factor(mut self, incremental_factor: i64) -> Self {
        self.incremental_factor = Some(incremental_factor);
        self
    }

    /// The incremental factor, if set
    pub fn incremental_factor(&self) -> Option<i64> {
        self.incremental_factor
    }

    /// Set the facet scope. The engine dropped named scopes; the argument is
    /// discarded and no `scope` key is ever serialized. Kept so older call
    /// sites keep chaining.
    #[deprecated(note = "the engine no longer supports facet scopes")]
    pub fn with_scope(self, _scope: &str) -> Self {
        self
    }

    /// Set the boost applied to this query.
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.envelope.set_boost(boost);
        self
    }

    /// The boost, if set
    pub fn boost(&self) -> Option<f64> {
        self.envelope.boost()
    }
}

impl Query for TopChildrenQuery {
    fn kind(&self) -> QueryKind {
        self.envelope.kind()
    }

    fn to_value(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.clone());
        body.insert("type".to_string(), Value::from(self.doc_type.clone()));
        if let Some(score) = self.score {
            body.insert("score".to_string(), Value::from(score.as_str()));
        }
        if let Some(mode) = self.score_mode {
            body.insert("score_mode".to_string(), Value::from(mode.as_str()));
        }
        if let Some(factor) = self.factor {
            body.insert("factor".to_string(), Value::from(factor));
        }
        if let Some(incremental) = self.incremental_factor {
            body.insert("incremental_factor".to_string(), Value::from(incremental));
        }
        self.envelope.wrap(body)
    }
}

impl Serialize for TopChildrenQuery {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{MatchAllQuery, TermQuery};
    use serde_json::json;

    fn child() -> TermQuery {
        TermQuery::new("user", "kimchy")
    }

    #[test]
    fn test_construction_embeds_snapshot_and_type() {
        let query = TopChildrenQuery::new(&child(), "blog_tag");
        assert_eq!(
            query.to_value(),
            json!({
                "top_children": {
                    "query": { "term": { "user": { "term": "kimchy" } } },
                    "type": "blog_tag"
                }
            })
        );
    }

    #[test]
    fn test_empty_doc_type_is_accepted() {
        let query = TopChildrenQuery::new(&child(), "");
        assert_eq!(query.doc_type(), "");
        assert_eq!(query.to_value()["top_children"]["type"], json!(""));
    }

    #[test]
    fn test_from_value_accepts_serialized_fragment() {
        let raw = json!({ "match_all": {} });
        let query = TopChildrenQuery::from_value(raw.clone(), "comment").unwrap();
        assert_eq!(query.query(), &raw);
    }

    #[test]
    fn test_from_value_rejects_non_queries() {
        assert!(TopChildrenQuery::from_value(json!(null), "t").is_err());
        assert!(TopChildrenQuery::from_value(json!(42), "t").is_err());
        assert!(TopChildrenQuery::from_value(json!({ "user": "kimchy" }), "t").is_err());
        assert!(TopChildrenQuery::from_value(json!({ "term": {}, "bool": {} }), "t").is_err());
    }

    #[test]
    fn test_with_query_value_rejects_non_queries() {
        let query = TopChildrenQuery::new(&child(), "blog_tag");
        assert!(query.with_query_value(json!("term")).is_err());
    }

    #[test]
    fn test_score_mode_normalizes_case() {
        for raw in ["MAX", "Max", "mAx"] {
            let query = TopChildrenQuery::new(&child(), "t").with_score_mode(raw);
            assert_eq!(query.score_mode(), Some(ScoreMode::Max));
            assert_eq!(query.to_value()["top_children"]["score_mode"], json!("max"));
        }
    }

    #[test]
    fn test_score_mode_discards_unrecognized_token() {
        let query = TopChildrenQuery::new(&child(), "t").with_score_mode("bogus");
        assert_eq!(query.score_mode(), None);
        assert!(query.to_value()["top_children"].get("score_mode").is_none());

        // A bad token must also preserve the previously stored value.
        let query = query.with_score_mode("sum").with_score_mode("mean");
        assert_eq!(query.score_mode(), Some(ScoreMode::Sum));
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_score_key_is_independent() {
        let query = TopChildrenQuery::new(&child(), "t")
            .with_score("AVG")
            .with_score_mode("total");
        assert_eq!(query.score(), Some(ScoreMode::Avg));
        assert_eq!(query.score_mode(), Some(ScoreMode::Total));

        let body = &query.to_value()["top_children"];
        assert_eq!(body["score"], json!("avg"));
        assert_eq!(body["score_mode"], json!("total"));
    }

    #[test]
    fn test_factor_is_stored_verbatim() {
        let query = TopChildrenQuery::new(&child(), "t").with_factor(10);
        assert_eq!(query.factor(), Some(10));

        // No range check on the client; the engine rejects bad values.
        let query = query.with_factor(-1);
        assert_eq!(query.factor(), Some(-1));
        assert_eq!(query.to_value()["top_children"]["factor"], json!(-1));
    }

    #[test]
    fn test_incremental_factor_round_trips() {
        let query = TopChildrenQuery::new(&child(), "t").with_incremental_factor(3);
        assert_eq!(query.incremental_factor(), Some(3));
        assert_eq!(query.to_value()["top_children"]["incremental_factor"], json!(3));
    }

    #[test]
    #[allow(deprecated)]
    fn test_scope_is_a_chainable_no_op() {
        let query = TopChildrenQuery::new(&child(), "t")
            .with_scope("my_scope")
            .with_factor(7);
        assert_eq!(query.factor(), Some(7));
        assert!(query.to_value()["top_children"].get("scope").is_none());
    }

    #[test]
    fn test_chaining_accumulates_all_mutations() {
        let query = TopChildrenQuery::new(&child(), "blog_tag")
            .with_doc_type("comment")
            .with_score_mode("max")
            .with_factor(7)
            .with_incremental_factor(2)
            .with_boost(1.2);
        assert_eq!(
            query.to_value(),
            json!({
                "top_children": {
                    "query": { "term": { "user": { "term": "kimchy" } } },
                    "type": "comment",
                    "score_mode": "max",
                    "factor": 7,
                    "incremental_factor": 2,
                    "boost": 1.2
                }
            })
        );
    }

    #[test]
    fn test_embedded_snapshot_is_independent_of_source() {
        let child = TermQuery::new("user", "kimchy");
        let query = TopChildrenQuery::new(&child, "blog_tag");
        let snapshot = query.query().clone();

        // Mutating the source builder must not affect the embedded copy.
        let _mutated = child.with_value("other");
        assert_eq!(query.query(), &snapshot);
    }

    #[test]
    fn test_replacing_the_child_query() {
        let query = TopChildrenQuery::new(&child(), "t").with_query(&MatchAllQuery::new());
        assert_eq!(query.query(), &json!({ "match_all": {} }));
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let query = TopChildrenQuery::new(&child(), "t")
            .with_score_mode("sum")
            .with_factor(5);
        assert_eq!(query.to_value(), query.to_value());
        assert_eq!(query.to_json().unwrap(), query.to_json().unwrap());
    }

    #[test]
    fn test_serde_serialize_matches_to_value() {
        let query = TopChildrenQuery::new(&child(), "t").with_factor(5);
        assert_eq!(serde_json::to_value(&query).unwrap(), query.to_value());
    }
}
