//! Has parent query builder

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::envelope::Envelope;
use super::kind::{check_query_value, QueryKind};
use super::score::{self, ScoreMode};
use super::Query;
use crate::error::Result;

/// Matches child documents whose parent of the given type matches the
/// embedded query. The inverse of [`HasChildQuery`](super::HasChildQuery).
#[derive(Debug, Clone)]
pub struct HasParentQuery {
    envelope: Envelope,

    /// Embedded snapshot of the parent query. Never absent.
    query: Value,

    /// Parent document type the query executes against
    parent_type: String,

    score_mode: Option<ScoreMode>,
}

impl HasParentQuery {
    /// Create a has parent query running `query` against parent documents of
    /// `parent_type`.
    pub fn new(query: &dyn Query, parent_type: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::new(QueryKind::HasParent),
            query: query.to_value(),
            parent_type: parent_type.into(),
            score_mode: None,
        }
    }

    /// Create a has parent query from an already-serialized parent fragment.
    ///
    /// Fails with [`QueryError::InvalidQuery`](crate::QueryError::InvalidQuery)
    /// when `query` is not a recognized query fragment.
    pub fn from_value(query: Value, parent_type: impl Into<String>) -> Result<Self> {
        Ok(Self {
            envelope: Envelope::new(QueryKind::HasParent),
            query: check_query_value(query)?,
            parent_type: parent_type.into(),
            score_mode: None,
        })
    }

    /// Replace the embedded parent query with a snapshot of `query`.
    pub fn with_query(mut self, query: &dyn Query) -> Self {
        self.query = query.to_value();
        self
    }

    /// The embedded parent query snapshot
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Set the parent document type. Stored verbatim.
    pub fn with_parent_type(mut self, parent_type: impl Into<String>) -> Self {
        self.parent_type = parent_type.into();
        self
    }

    /// The parent document type
    pub fn parent_type(&self) -> &str {
        &self.parent_type
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

impl Query for HasParentQuery {
    fn kind(&self) -> QueryKind {
        self.envelope.kind()
    }

    fn to_value(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.clone());
        body.insert(
            "parent_type".to_string(),
            Value::from(self.parent_type.clone()),
        );
        if let Some(mode) = self.score_mode {
            body.insert("score_mode".to_string(), Value::from(mode.as_str()));
        }
        self.envelope.wrap(body)
    }
}

impl Serialize for HasParentQuery {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}
