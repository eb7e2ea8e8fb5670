//! Query fragment builders for the search engine's JSON query language
//!
//! Every query type follows the same pattern: a builder wrapping the single
//! JSON key it serializes under, `with_*` setters that validate and store a
//! field then hand the builder back for chaining, plain-named getters, and a
//! shared serialization contract producing `{ "<kind>": { ...fields... } }`
//! with unset fields omitted. Builders compose by embedding another
//! builder's serialized snapshot, never a live reference.

pub mod bool_query;
pub mod constant_score;
pub mod envelope;
pub mod has_child;
pub mod has_parent;
pub mod kind;
pub mod match_all;
pub mod score;
pub mod term;
pub mod top_children;

pub use bool_query::BoolQuery;
pub use constant_score::ConstantScoreQuery;
pub use envelope::Envelope;
pub use has_child::HasChildQuery;
pub use has_parent::HasParentQuery;
pub use kind::{is_query, QueryKind};
pub use match_all::MatchAllQuery;
pub use score::ScoreMode;
pub use term::TermQuery;
pub use top_children::TopChildrenQuery;

use crate::error::Result;
use serde_json::Value;

/// Capability implemented by every query fragment builder
///
/// A query can report the kind it serializes under and produce an owned
/// snapshot of its current state. Snapshots are plain JSON values: embedding
/// one inside another builder copies it, so mutating the source builder
/// afterward leaves the embedded copy untouched.
pub trait Query {
    /// The query-type key this fragment serializes under
    fn kind(&self) -> QueryKind;

    /// Serialize the fragment into its single-key envelope
    fn to_value(&self) -> Value;

    /// Render the fragment as a JSON string
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }
}
