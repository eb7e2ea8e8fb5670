//! Fluent builders for an Elasticsearch-style JSON search query language
//!
//! This library constructs search requests client-side as a family of small
//! builder objects. Each query type wraps the single JSON key it serializes
//! under, validates what it stores, and hands itself back from every setter
//! so queries read as one chained expression. Builders nest by embedding
//! each other's serialized snapshots and flatten into one well-formed JSON
//! document on demand.
//!
//! ## Features
//!
//! - **Chained construction**: every setter returns the builder
//! - **Snapshot composition**: nesting copies serialized state, never live
//!   references
//! - **Tolerant enum handling**: unrecognized score modes are discarded (and
//!   logged) instead of breaking a chain
//! - **Serde interop**: every builder implements `Serialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use esdsl::prelude::*;
//!
//! fn main() -> esdsl::Result<()> {
//!     let child = TermQuery::new("tag", "something");
//!     let query = TopChildrenQuery::new(&child, "blog_tag")
//!         .with_score_mode("max")
//!         .with_factor(5);
//!     println!("{}", query.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod query;

pub use error::{QueryError, Result};
pub use query::Query;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{QueryError, Result};
    pub use crate::query::{
        is_query, BoolQuery, ConstantScoreQuery, HasChildQuery, HasParentQuery, MatchAllQuery,
        Query, QueryKind, ScoreMode, TermQuery, TopChildrenQuery,
    };
}
