//! Score aggregation modes for parent/child queries

use serde::Serialize;
use tracing::warn;

/// Strategy for folding matching child-document scores into the parent
/// document's score
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    Max,
    Sum,
    Avg,
    Total,
}

impl ScoreMode {
    /// The wire token for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreMode::Max => "max",
            ScoreMode::Sum => "sum",
            ScoreMode::Avg => "avg",
            ScoreMode::Total => "total",
        }
    }

    /// Parse a score mode, case-insensitively.
    ///
    /// Returns `None` for anything outside `max`, `sum`, `avg`, `total`.
    /// The `with_score*` setters discard a `None` instead of failing, so a
    /// typo cannot break a builder chain; this mirrors the legacy client
    /// behavior the engine's users rely on and is intentional, not a defect.
    pub fn parse(s: &str) -> Option<ScoreMode> {
        match s.to_lowercase().as_str() {
            "max" => Some(ScoreMode::Max),
            "sum" => Some(ScoreMode::Sum),
            "avg" => Some(ScoreMode::Avg),
            "total" => Some(ScoreMode::Total),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScoreMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a score mode for a setter, logging the discard of an unrecognized
/// token.
pub(crate) fn parse_or_discard(s: &str) -> Option<ScoreMode> {
    let mode = ScoreMode::parse(s);
    if mode.is_none() {
        warn!("Ignoring unrecognized score mode: {:?}", s);
    }
    mode
}
