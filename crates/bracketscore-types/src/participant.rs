//! Participant labels and winner slots.
//!
//! A [`Participant`] is an opaque label. A [`Winner`] is either a decided
//! participant or [`Winner::Unknown`] when the real-world outcome is not in
//! yet. On the wire an unknown winner is written as `"?"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_WINNER_LABEL;

/// Opaque competitor label. Callers are expected to keep labels distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(pub String);

impl Participant {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Participant {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Participant {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Winner
// ---------------------------------------------------------------------------

/// Outcome slot of a match: a decided participant, or not known yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Winner {
    Decided(Participant),
    Unknown,
}

impl Winner {
    /// Winner with the given label. The unknown-winner label `"?"` yields
    /// [`Winner::Unknown`], matching the wire form.
    #[must_use]
    pub fn decided(label: impl Into<String>) -> Self {
        Self::from(Participant::new(label))
    }

    /// Parse the wire form: `"?"` is unknown, anything else a participant.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::decided(label)
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn participant(&self) -> Option<&Participant> {
        match self {
            Self::Decided(p) => Some(p),
            Self::Unknown => None,
        }
    }
}

impl From<Participant> for Winner {
    fn from(participant: Participant) -> Self {
        if participant.as_str() == UNKNOWN_WINNER_LABEL {
            Self::Unknown
        } else {
            Self::Decided(participant)
        }
    }
}

impl From<String> for Winner {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Winner> for String {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::Decided(p) => p.0,
            Winner::Unknown => UNKNOWN_WINNER_LABEL.to_string(),
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decided(p) => write!(f, "{p}"),
            Self::Unknown => f.write_str(UNKNOWN_WINNER_LABEL),
        }
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which entrant of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}
