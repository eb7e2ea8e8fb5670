//! Has child query builder

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::envelope::Envelope;
use super::kind::{check_query_value, QueryKind};
use super::score::{self, ScoreMode};
use super::Query;
use crate::error::Result;

/// Matches parent documents whose children of the given type match the
/// embedded query. The sibling of [`TopChildrenQuery`](super::TopChildrenQuery)
/// without the estimated-hits rerun machinery.
#[derive(Debug, Clone)]
pub struct HasChildQuery {
    envelope: Envelope,

    /// Embedded snapshot of the child query. Never absent.
    query: Value,

    /// Child document type the query executes against
    child_type: String,

    score_mode: Option<ScoreMode>,
}

impl HasChildQuery {
    /// Create a has child query running `query` against child documents of
    /// `child_type`.
    pub fn new(query: &dyn Query, child_type: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::new(QueryKind::HasChild),
            query: query.to_value(),
            child_type: child_type.into(),
            score_mode: None,
        }
    }

    /// Create a has child query from an already-serialized child fragment.
    ///
    /// Fails with [`QueryError::InvalidQuery`](crate::QueryError::InvalidQuery)
    /// when `query` is not a recognized query fragment.
    pub fn from_value(query: Value, child_type: impl Into<String>) -> Result<Self> {
        Ok(Self {
            envelope: Envelope::new(QueryKind::HasChild),
            query: check_query_value(query)?,
            child_type: child_type.into(),
            score_mode: None,
        })
    }

    /// Replace the embedded child query with a snapshot of `query`.
    pub fn with_query(mut self, query: &dyn Query) -> Self {
        self.query = query.to_value();
        self
    }

    /// The embedded child query snapshot
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Set the child document type. Stored verbatim.
    pub fn with_child_type(mut self, child_type: impl Into<String>) -> Self {
        self.child_type = child_type.into();
        self
    }

    /// The child document type
    pub fn child_type(&self) -> &str {
        &self.child_type
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

impl Query for HasChildQuery {
    fn kind(&self) -> QueryKind {
        self.envelope.kind()
    }

    fn to_value(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.clone());
        body.insert("type".to_string(), Value::from(self.child_type.clone()));
        if let Some(mode) = self.score_mode {
            body.insert("score_mode".to_string(), Value::from(mode.as_str()));
        }
        self.envelope.wrap(body)
    }
}

impl Serialize for HasChildQuery {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}
