//! Match all query builder

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::envelope::Envelope;
use super::kind::QueryKind;
use super::Query;

/// Matches every document in the index, all with a neutral score of 1.0.
#[derive(Debug, Clone)]
pub struct MatchAllQuery {
    envelope: Envelope,
}

impl MatchAllQuery {
    /// Create a match all query.
    pub fn new() -> Self {
        Self {
            envelope: Envelope::new(QueryKind::MatchAll),
        }
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

impl Default for MatchAllQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for MatchAllQuery {
    fn kind(&self) -> QueryKind {
        self.envelope.kind()
    }

    fn to_value(&self) -> Value {
        self.envelope.wrap(Map::new())
    }
}

impl Serialize for MatchAllQuery {
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
    use serde_json::json;

    #[test]
    fn test_serializes_to_empty_body() {
        assert_eq!(MatchAllQuery::new().to_value(), json!({ "match_all": {} }));
    }

    #[test]
    fn test_boost_lands_in_body() {
        let query = MatchAllQuery::new().with_boost(0.4);
        assert_eq!(query.boost(), Some(0.4));
        assert_eq!(query.to_value(), json!({ "match_all": { "boost": 0.4 } }));
    }
}
