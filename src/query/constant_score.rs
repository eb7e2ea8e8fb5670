//! Constant score query builder

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::envelope::Envelope;
use super::kind::{check_query_value, QueryKind};
use super::Query;
use crate::error::Result;

/// Wraps another query and scores every matching document with the wrapper's
/// boost instead of the wrapped query's relevance score.
#[derive(Debug, Clone)]
pub struct ConstantScoreQuery {
    envelope: Envelope,

    /// Embedded snapshot of the wrapped query. Never absent.
    query: Value,
}

impl ConstantScoreQuery {
    /// Create a constant score query wrapping `query`.
    pub fn new(query: &dyn Query) -> Self {
        Self {
            envelope: Envelope::new(QueryKind::ConstantScore),
            query: query.to_value(),
        }
    }

    /// Create a constant score query from an already-serialized fragment.
    ///
    /// Fails with [`QueryError::InvalidQuery`](crate::QueryError::InvalidQuery)
    /// when `query` is not a recognized query fragment.
    pub fn from_value(query: Value) -> Result<Self> {
        Ok(Self {
            envelope: Envelope::new(QueryKind::ConstantScore),
            query: check_query_value(query)?,
        })
    }

    /// Replace the wrapped query with a snapshot of `query`.
    pub fn with_query(mut self, query: &dyn Query) -> Self {
        self.query = query.to_value();
        self
    }

    /// The wrapped query snapshot
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Set the constant score given to every matching document.
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.envelope.set_boost(boost);
        self
    }

    /// The boost, if set
    pub fn boost(&self) -> Option<f64> {
        self.envelope.boost()
    }
}

impl Query for ConstantScoreQuery {
    fn kind(&self) -> QueryKind {
        self.envelope.kind()
    }

    fn to_value(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.clone());
        self.envelope.wrap(body)
    }
}

impl Serialize for ConstantScoreQuery {
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
    use crate::query::TermQuery;
    use serde_json::json;

    #[test]
    fn test_wraps_query_with_boost() {
        let query = ConstantScoreQuery::new(&TermQuery::new("user", "kimchy")).with_boost(1.5);
        assert_eq!(
            query.to_value(),
            json!({
                "constant_score": {
                    "query": { "term": { "user": { "term": "kimchy" } } },
                    "boost": 1.5
                }
            })
        );
    }

    #[test]
    fn test_from_value_validates_fragment() {
        assert!(ConstantScoreQuery::from_value(json!({ "match_all": {} })).is_ok());
        assert!(ConstantScoreQuery::from_value(json!([1, 2, 3])).is_err());
    }
}
