//! Term query builder

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::envelope::Envelope;
use super::kind::QueryKind;
use super::Query;

/// Matches documents containing the exact, unanalyzed term in the given
/// field.
#[derive(Debug, Clone)]
pub struct TermQuery {
    envelope: Envelope,

    field: String,

    /// The term to match, stored verbatim (any JSON scalar the engine
    /// accepts)
    value: Value,
}

impl TermQuery {
    /// Create a term query matching `value` in `field`.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            envelope: Envelope::new(QueryKind::Term),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Set the field to match against.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// The field this query matches against
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Set the term to match. Stored verbatim.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// The term this query matches
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Set the boost applied to this query. Unlike most of the family, the
    /// term query nests boost inside the field object.
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.envelope.set_boost(boost);
        self
    }

    /// The boost, if set
    pub fn boost(&self) -> Option<f64> {
        self.envelope.boost()
    }
}

impl Query for TermQuery {
    fn kind(&self) -> QueryKind {
        self.envelope.kind()
    }

    fn to_value(&self) -> Value {
        let mut term = Map::new();
        term.insert("term".to_string(), self.value.clone());
        if let Some(boost) = self.envelope.boost() {
            term.insert("boost".to_string(), Value::from(boost));
        }
        let mut body = Map::with_capacity(1);
        body.insert(self.field.clone(), Value::Object(term));
        self.envelope.wrap_verbatim(body)
    }
}

impl Serialize for TermQuery {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}
