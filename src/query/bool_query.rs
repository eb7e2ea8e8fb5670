//! Boolean compound query builder

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::envelope::Envelope;
use super::kind::{check_query_value, QueryKind};
use super::Query;
use crate::error::Result;

/// Combines other queries with boolean clause semantics: documents must
/// match every `must` clause, must not match any `must_not` clause, and
/// score higher for each matching `should` clause.
#[derive(Debug, Clone)]
pub struct BoolQuery {
    envelope: Envelope,

    must: Vec<Value>,
    should: Vec<Value>,
    must_not: Vec<Value>,

    minimum_number_should_match: Option<i64>,
}

impl BoolQuery {
    /// Create an empty boolean query.
    pub fn new() -> Self {
        Self {
            envelope: Envelope::new(QueryKind::Bool),
            must: Vec::new(),
            should: Vec::new(),
            must_not: Vec::new(),
            minimum_number_should_match: None,
        }
    }

    /// Append a clause documents must match.
    pub fn must(mut self, query: &dyn Query) -> Self {
        self.must.push(query.to_value());
        self
    }

    /// Append an already-serialized `must` clause.
    ///
    /// Fails with [`QueryError::InvalidQuery`](crate::QueryError::InvalidQuery)
    /// when the value is not a recognized query fragment.
    pub fn must_value(mut self, query: Value) -> Result<Self> {
        self.must.push(check_query_value(query)?);
        Ok(self)
    }

    /// Append a clause documents should match.
    pub fn should(mut self, query: &dyn Query) -> Self {
        self.should.push(query.to_value());
        self
    }

    /// Append a clause documents must not match.
    pub fn must_not(mut self, query: &dyn Query) -> Self {
        self.must_not.push(query.to_value());
        self
    }

    /// The accumulated `must` clause snapshots
    pub fn must_clauses(&self) -> &[Value] {
        &self.must
    }

    /// The accumulated `should` clause snapshots
    pub fn should_clauses(&self) -> &[Value] {
        &self.should
    }

    /// The accumulated `must_not` clause snapshots
    pub fn must_not_clauses(&self) -> &[Value] {
        &self.must_not
    }

    /// Set how many `should` clauses must match for a document to qualify.
    /// Stored verbatim.
    pub fn with_minimum_number_should_match(mut self, minimum: i64) -> Self {
        self.minimum_number_should_match = Some(minimum);
        self
    }

    /// The minimum number of `should` clauses required, if set
    pub fn minimum_number_should_match(&self) -> Option<i64> {
        self.minimum_number_should_match
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

impl Default for BoolQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for BoolQuery {
    fn kind(&self) -> QueryKind {
        self.envelope.kind()
    }

    fn to_value(&self) -> Value {
        let mut body = Map::new();
        if !self.must.is_empty() {
            body.insert("must".to_string(), Value::Array(self.must.clone()));
        }
        if !self.should.is_empty() {
            body.insert("should".to_string(), Value::Array(self.should.clone()));
        }
        if !self.must_not.is_empty() {
            body.insert("must_not".to_string(), Value::Array(self.must_not.clone()));
        }
        if let Some(minimum) = self.minimum_number_should_match {
            body.insert(
                "minimum_number_should_match".to_string(),
                Value::from(minimum),
            );
        }
        self.envelope.wrap(body)
    }
}

impl Serialize for BoolQuery {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}
