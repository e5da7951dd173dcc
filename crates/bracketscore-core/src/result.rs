//! Authoritative, possibly incomplete, bracket outcome.

use serde::{Deserialize, Serialize};

use crate::{Bracket, Match};

/// Ground truth for a tournament in progress.
///
/// A match with an unknown winner has not been decided yet. Matches below
/// it may already be decided; nothing here enforces round ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BracketResult {
    bracket: Bracket,
}

impl BracketResult {
    #[must_use]
    pub fn new(bracket: Bracket) -> Self {
        Self { bracket }
    }

    #[must_use]
    pub fn bracket(&self) -> &Bracket {
        &self.bracket
    }

    /// The final.
    #[must_use]
    pub fn root(&self) -> &Match {
        self.bracket.root()
    }

    /// `true` once every match has a decided winner.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.bracket.unresolved_count() == 0
    }

    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.bracket.unresolved_count()
    }
}

impl From<Bracket> for BracketResult {
    fn from(bracket: Bracket) -> Self {
        Self::new(bracket)
    }
}
