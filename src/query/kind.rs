//! Query type tags and the query-fragment membership test

use serde_json::Value;
use tracing::warn;

use crate::error::{QueryError, Result};

/// Query types recognized by this crate
///
/// Every builder serializes under exactly one of these keys. The set doubles
/// as the membership test for raw JSON values offered as sub-queries: a
/// value is a query fragment only if its single top-level key is listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    MatchAll,
    Term,
    Bool,
    ConstantScore,
    HasChild,
    HasParent,
    TopChildren,
}

impl QueryKind {
    /// All recognized query kinds
    pub const ALL: [QueryKind; 7] = [
        QueryKind::MatchAll,
        QueryKind::Term,
        QueryKind::Bool,
        QueryKind::ConstantScore,
        QueryKind::HasChild,
        QueryKind::HasParent,
        QueryKind::TopChildren,
    ];

    /// The wire key this query type serializes under
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::MatchAll => "match_all",
            QueryKind::Term => "term",
            QueryKind::Bool => "bool",
            QueryKind::ConstantScore => "constant_score",
            QueryKind::HasChild => "has_child",
            QueryKind::HasParent => "has_parent",
            QueryKind::TopChildren => "top_children",
        }
    }

    /// Look up a query kind by its wire key
    pub fn from_key(key: &str) -> Option<QueryKind> {
        QueryKind::ALL.iter().copied().find(|kind| kind.as_str() == key)
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a raw JSON value is the serialized envelope of a recognized
/// query fragment: an object with a single top-level key naming a known
/// query type, whose value is itself an object.
pub fn is_query(value: &Value) -> bool {
    match value.as_object() {
        Some(fields) if fields.len() == 1 => fields
            .iter()
            .all(|(key, body)| QueryKind::from_key(key).is_some() && body.is_object()),
        _ => false,
    }
}

/// Validate a raw value offered as a sub-query, passing it through unchanged.
///
/// Used by every `Value`-accepting constructor and setter in the family.
pub(crate) fn check_query_value(value: Value) -> Result<Value> {
    if is_query(&value) {
        Ok(value)
    } else {
        warn!("Rejecting sub-query argument: {}", describe(&value));
        Err(QueryError::invalid_query(describe(&value)))
    }
}

/// Human-readable shape of a rejected value for the error message.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "expected a single-key query envelope, got null".to_string(),
        Value::Bool(_) => "expected a single-key query envelope, got a boolean".to_string(),
        Value::Number(_) => "expected a single-key query envelope, got a number".to_string(),
        Value::String(_) => "expected a single-key query envelope, got a string".to_string(),
        Value::Array(_) => "expected a single-key query envelope, got an array".to_string(),
        Value::Object(fields) => match fields.iter().next() {
            Some((key, _)) if fields.len() == 1 => {
                format!("'{}' is not a recognized query type", key)
            }
            _ => format!(
                "expected a single-key query envelope, got an object with {} keys",
                fields.len()
            ),
        },
    }
}
