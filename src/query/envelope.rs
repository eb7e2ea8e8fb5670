//! Shared envelope state composed into every query builder

use serde_json::{Map, Value};

use super::kind::QueryKind;

/// Common state every query fragment carries: the query-type key it
/// serializes under, fixed at construction, and the optional boost applied
/// to the whole fragment.
///
/// Builders embed an `Envelope` by value and delegate their `boost`
/// accessors and the final wrap step to it, rather than inheriting them.
#[derive(Debug, Clone)]
pub struct Envelope {
    kind: QueryKind,
    boost: Option<f64>,
}

impl Envelope {
    pub(crate) fn new(kind: QueryKind) -> Self {
        Self { kind, boost: None }
    }

    /// The query-type key this fragment serializes under
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// The boost applied to this fragment, if set
    pub fn boost(&self) -> Option<f64> {
        self.boost
    }

    pub(crate) fn set_boost(&mut self, boost: f64) {
        self.boost = Some(boost);
    }

    /// Wrap a field body into the single-key envelope `{ <kind>: body }`,
    /// inserting `boost` at the top level of the body if set.
    pub(crate) fn wrap(&self, mut body: Map<String, Value>) -> Value {
        if let Some(boost) = self.boost {
            body.insert("boost".to_string(), Value::from(boost));
        }
        self.wrap_verbatim(body)
    }

    /// Wrap without touching the body. For builders that place boost
    /// somewhere other than the body's top level (the term query nests it
    /// inside the field object).
    pub(crate) fn wrap_verbatim(&self, body: Map<String, Value>) -> Value {
        let mut envelope = Map::with_capacity(1);
        envelope.insert(self.kind.as_str().to_string(), Value::Object(body));
        Value::Object(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_produces_single_key_envelope() {
        let envelope = Envelope::new(QueryKind::MatchAll);
        assert_eq!(envelope.wrap(Map::new()), json!({ "match_all": {} }));
    }

    #[test]
    fn test_wrap_inserts_boost_when_set() {
        let mut envelope = Envelope::new(QueryKind::MatchAll);
        envelope.set_boost(2.5);
        assert_eq!(envelope.wrap(Map::new()), json!({ "match_all": { "boost": 2.5 } }));
    }

    #[test]
    fn test_wrap_verbatim_ignores_boost() {
        let mut envelope = Envelope::new(QueryKind::Term);
        envelope.set_boost(2.5);
        assert_eq!(envelope.wrap_verbatim(Map::new()), json!({ "term": {} }));
    }
}
