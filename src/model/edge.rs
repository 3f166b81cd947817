//! Actor–movie edge.

use serde::{Deserialize, Serialize};

/// An undirected actor–movie edge. The weight is informational (the
/// actor's age when the edge was built) and no ranking reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub actor: String,
    pub movie: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(actor: impl Into<String>, movie: impl Into<String>, weight: f64) -> Self {
        Self { actor: actor.into(), movie: movie.into(), weight }
    }
}
