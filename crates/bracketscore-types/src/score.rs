//! Three-state score used for single matches and whole rounds.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Score of a match or a round.
///
/// `Unscored` means nothing was computed (never scored, or the round does
/// not exist). `Pending` means the real-world outcome is not known yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Score {
    #[default]
    Unscored,
    Pending,
    Points(Decimal),
}

impl Score {
    /// The computed value, if any.
    #[must_use]
    pub fn points(self) -> Option<Decimal> {
        match self {
            Self::Points(p) => Some(p),
            Self::Unscored | Self::Pending => None,
        }
    }

    #[must_use]
    pub fn is_determined(self) -> bool {
        matches!(self, Self::Points(_))
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unscored => write!(f, "UNSCORED"),
            Self::Pending => write!(f, "PENDING"),
            Self::Points(p) => write!(f, "{p}"),
        }
    }
}
