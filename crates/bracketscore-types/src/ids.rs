//! Identifiers used throughout bracketscore.
//!
//! `MatchId` is a position in a bracket arena. `SubmissionId` uses UUIDv7
//! so registration order sorts lexicographically.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// MatchId
// ---------------------------------------------------------------------------

/// Index of a match inside one bracket arena.
///
/// Only meaningful for the bracket (or builder) that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct MatchId(pub usize);

impl MatchId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SubmissionId
// ---------------------------------------------------------------------------

/// Unique identifier for a challenge submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
