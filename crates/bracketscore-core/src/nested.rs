//! Nested (tree-shaped) form of a bracket for JSON files.
//!
//! ```json
//! {
//!   "left":  { "left": "A", "right": "B", "winner": "A", "left_score": "4", "right_score": "0" },
//!   "right": { "left": "C", "right": "D", "winner": "C", "left_score": "4", "right_score": "2" },
//!   "winner": "?", "left_score": "0", "right_score": "0"
//! }
//! ```
//!
//! Loading rebuilds the arena through [`BracketBuilder`], so every
//! construction check applies to files as well.

use bracketscore_types::{BracketError, MatchId, Participant, Result, Winner};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Bracket, BracketBuilder, Entrant};

/// Entrant in nested form: a participant label or an inline match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedEntrant {
    Participant(Participant),
    Match(Box<NestedMatch>),
}

/// Match in nested form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedMatch {
    pub left: NestedEntrant,
    pub right: NestedEntrant,
    pub winner: Winner,
    pub left_score: Decimal,
    pub right_score: Decimal,
}

impl NestedMatch {
    /// Add this subtree to `builder` (children first) and return its id.
    pub fn build_into(&self, builder: &mut BracketBuilder) -> Result<MatchId> {
        let left = Self::build_entrant(&self.left, builder)?;
        let right = Self::build_entrant(&self.right, builder)?;
        builder.add_match(
            left,
            right,
            self.winner.clone(),
            self.left_score,
            self.right_score,
        )
    }

    fn build_entrant(entrant: &NestedEntrant, builder: &mut BracketBuilder) -> Result<Entrant> {
        Ok(match entrant {
            NestedEntrant::Participant(p) => Entrant::Participant(p.clone()),
            NestedEntrant::Match(m) => Entrant::Match(m.build_into(builder)?),
        })
    }

    fn from_arena(bracket: &Bracket, id: MatchId) -> Self {
        let m = bracket.node(id);
        let unfold = |entrant: &Entrant| match entrant {
            Entrant::Participant(p) => NestedEntrant::Participant(p.clone()),
            Entrant::Match(child) => NestedEntrant::Match(Box::new(Self::from_arena(bracket, *child))),
        };
        Self {
            left: unfold(m.left()),
            right: unfold(m.right()),
            winner: m.winner().clone(),
            left_score: m.left_score(),
            right_score: m.right_score(),
        }
    }
}

impl TryFrom<NestedMatch> for Bracket {
    type Error = BracketError;

    fn try_from(root: NestedMatch) -> Result<Self> {
        let mut builder = BracketBuilder::new();
        let root_id = root.build_into(&mut builder)?;
        builder.finish(root_id)
    }
}

impl From<Bracket> for NestedMatch {
    fn from(bracket: Bracket) -> Self {
        Self::from_arena(&bracket, bracket.root_id())
    }
}

impl Bracket {
    /// Parse a bracket from its nested JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let nested: NestedMatch = serde_json::from_str(json)?;
        Self::try_from(nested)
    }
}
