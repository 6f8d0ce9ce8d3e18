pub mod binary_search;
pub mod encoding;
pub mod sat_solver;

pub use binary_search::*;
pub use encoding::*;
pub use sat_solver::*;

use crate::utils::VertexCover;

/// Answer of a single bounded "does a cover of size exactly k exist" decision.
#[derive(Clone, Debug)]
pub enum DecisionOutcome {
    /// The oracle produced a satisfying assignment; the selected vertices.
    Covered(VertexCover),
    /// The oracle proved that no cover of the requested size exists.
    NotCovered,
    /// The budget elapsed before the oracle answered.
    Timeout,
}

/// Result of the full minimum-k search.
#[derive(Clone, Debug)]
pub enum ExactOutcome {
    /// No decision timed out; the cover size is the certified minimum.
    Minimum(VertexCover),
    /// A valid cover, but at least one decision timed out along the way, so a
    /// smaller cover may have been missed.
    Unverified(VertexCover),
    /// The search range collapsed without retrieving any cover.
    Exhausted,
}

impl ExactOutcome {
    pub fn cover(&self) -> Option<&VertexCover> {
        match self {
            ExactOutcome::Minimum(cover) | ExactOutcome::Unverified(cover) => Some(cover),
            ExactOutcome::Exhausted => None,
        }
    }

    pub fn size(&self) -> Option<usize> {
        self.cover().map(|c| c.len())
    }
}
