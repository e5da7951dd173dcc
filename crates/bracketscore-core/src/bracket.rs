//! Arena storage for a bracket and its bottom-up builder.
//!
//! Matches live in a flat `Vec` and refer to their nested entrants by
//! [`MatchId`]. A child is always added before its parent, so ids grow
//! toward the final and the arena cannot contain cycles.

use bracketscore_types::{BracketError, MatchId, Result, Side, Winner};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    matchup::{Entrant, Match, MatchPrediction},
    nested::NestedMatch,
};

/// An immutable single-elimination outcome tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NestedMatch", into = "NestedMatch")]
pub struct Bracket {
    matches: Vec<Match>,
    root: MatchId,
}

impl Bracket {
    #[must_use]
    pub fn builder() -> BracketBuilder {
        BracketBuilder::default()
    }

    #[must_use]
    pub fn root_id(&self) -> MatchId {
        self.root
    }

    /// The final.
    #[must_use]
    pub fn root(&self) -> &Match {
        self.node(self.root)
    }

    #[must_use]
    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.get(id.index())
    }

    /// Ids issued by this bracket are always in range.
    pub(crate) fn node(&self, id: MatchId) -> &Match {
        &self.matches[id.index()]
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn matches(&self) -> impl Iterator<Item = (MatchId, &Match)> {
        self.matches.iter().enumerate().map(|(i, m)| (MatchId(i), m))
    }

    /// Match ids grouped by depth, each level in breadth-first order
    /// (left before right).
    #[must_use]
    pub fn levels(&self) -> Vec<Vec<MatchId>> {
        let mut levels = Vec::new();
        let mut frontier = vec![self.root];
        while !frontier.is_empty() {
            let next: Vec<MatchId> = frontier
                .iter()
                .flat_map(|id| {
                    let m = self.node(*id);
                    [m.left().match_id(), m.right().match_id()]
                })
                .flatten()
                .collect();
            levels.push(frontier);
            frontier = next;
        }
        levels
    }

    /// Number of rounds, i.e. the deepest depth plus one.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.levels().len()
    }

    #[must_use]
    pub fn matches_at_depth(&self, depth: usize) -> Vec<MatchId> {
        self.levels().into_iter().nth(depth).unwrap_or_default()
    }

    /// Check that `other` has the same shape, reporting the first
    /// diverging position in breadth-first order.
    pub fn check_congruent(&self, other: &Bracket) -> Result<()> {
        let mut ours = vec![self.root];
        let mut theirs = vec![other.root];
        let mut depth = 0;
        while !ours.is_empty() {
            let mut next_ours = Vec::with_capacity(ours.len() * 2);
            let mut next_theirs = Vec::with_capacity(theirs.len() * 2);
            for (index, (a, b)) in ours.iter().zip(&theirs).enumerate() {
                pair_children(
                    depth,
                    index,
                    self.node(*a),
                    other.node(*b),
                    &mut next_ours,
                    &mut next_theirs,
                )?;
            }
            ours = next_ours;
            theirs = next_theirs;
            depth += 1;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_congruent(&self, other: &Bracket) -> bool {
        self.check_congruent(other).is_ok()
    }

    /// Number of matches whose winner is still unknown.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.is_decided()).count()
    }
}

/// Pair up the entrants of two corresponding matches.
///
/// Nested matches are pushed onto the next frontiers (left, then right).
/// Both frontiers grow in lockstep, so the i-th entries keep corresponding.
pub(crate) fn pair_children(
    depth: usize,
    index: usize,
    ours: &Match,
    theirs: &Match,
    next_ours: &mut Vec<MatchId>,
    next_theirs: &mut Vec<MatchId>,
) -> Result<()> {
    for (side, a, b) in [
        (Side::Left, ours.left(), theirs.left()),
        (Side::Right, ours.right(), theirs.right()),
    ] {
        match (a, b) {
            (Entrant::Match(a), Entrant::Match(b)) => {
                next_ours.push(*a);
                next_theirs.push(*b);
            }
            (Entrant::Participant(_), Entrant::Participant(_)) => {}
            _ => return Err(BracketError::ShapeMismatch { depth, index, side }),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// BracketBuilder
// ---------------------------------------------------------------------------

/// Builds a [`Bracket`] bottom-up: earliest rounds first, final last.
#[derive(Debug, Default)]
pub struct BracketBuilder {
    matches: Vec<Match>,
}

impl BracketBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a match. Nested entrants must already be in the builder.
    ///
    /// # Errors
    /// [`BracketError::UnknownMatch`] for a dangling entrant id,
    /// [`BracketError::MalformedBracket`] for a participant labelled `"?"`, or
    /// [`BracketError::InvalidWinner`] if `winner` is neither participant.
    pub fn add_match(
        &mut self,
        left: impl Into<Entrant>,
        right: impl Into<Entrant>,
        winner: Winner,
        left_score: Decimal,
        right_score: Decimal,
    ) -> Result<MatchId> {
        let m = Match::assemble(
            &self.matches,
            left.into(),
            right.into(),
            winner,
            left_score,
            right_score,
        )?;
        let id = MatchId(self.matches.len());
        self.matches.push(m);
        Ok(id)
    }

    /// Forecast a match between entrants already in the builder.
    pub fn predict_match(
        &self,
        left: impl Into<Entrant>,
        right: impl Into<Entrant>,
        predicted_left_score: Decimal,
        predicted_right_score: Decimal,
    ) -> Result<MatchPrediction> {
        MatchPrediction::assemble(
            &self.matches,
            left.into(),
            right.into(),
            predicted_left_score,
            predicted_right_score,
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Seal the arena with `root` as the final.
    ///
    /// Every other match must be the entrant of exactly one match, and the
    /// root of none.
    pub fn finish(self, root: MatchId) -> Result<Bracket> {
        if root.index() >= self.matches.len() {
            return Err(BracketError::UnknownMatch(root));
        }

        let mut parents = vec![0usize; self.matches.len()];
        for m in &self.matches {
            for child in [m.left().match_id(), m.right().match_id()].into_iter().flatten() {
                parents[child.index()] += 1;
                if parents[child.index()] > 1 {
                    return Err(BracketError::MalformedBracket {
                        reason: format!("{child} is an entrant of more than one match"),
                    });
                }
            }
        }
        if parents[root.index()] > 0 {
            return Err(BracketError::MalformedBracket {
                reason: format!("root {root} is an entrant of another match"),
            });
        }
        if let Some(orphan) = (0..self.matches.len()).find(|&i| i != root.index() && parents[i] == 0)
        {
            return Err(BracketError::MalformedBracket {
                reason: format!("{} is not reachable from the root", MatchId(orphan)),
            });
        }

        Ok(Bracket {
            matches: self.matches,
            root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn four_team(final_winner: Winner) -> Bracket {
        let mut b = Bracket::builder();
        let left = b.add_match("A", "B", Winner::decided("A"), pts(4), pts(0)).unwrap();
        let right = b.add_match("C", "D", Winner::decided("C"), pts(4), pts(2)).unwrap();
        let root = b.add_match(left, right, final_winner, pts(2), pts(4)).unwrap();
        b.finish(root).unwrap()
    }

    #[test]
    fn builds_four_team_bracket() {
        let bracket = four_team(Winner::decided("C"));
        assert_eq!(bracket.match_count(), 3);
        assert_eq!(bracket.round_count(), 2);
        assert_eq!(bracket.root().winner(), &Winner::decided("C"));
        assert_eq!(bracket.root().left_participant(), &Winner::decided("A"));
        assert_eq!(bracket.matches_at_depth(1), vec![MatchId(0), MatchId(1)]);
        assert!(bracket.matches_at_depth(2).is_empty());
    }

    #[test]
    fn unknown_label_cannot_enter_the_builder() {
        let mut b = Bracket::builder();
        let err = b
            .add_match("?", "B", Winner::decided("?"), pts(2), pts(1))
            .unwrap_err();
        assert!(matches!(err, BracketError::MalformedBracket { .. }), "Got: {err:?}");
        assert!(b.is_empty());
    }

    #[test]
    fn single_match_bracket() {
        let mut b = Bracket::builder();
        let root = b.add_match("A", "B", Winner::Unknown, pts(0), pts(0)).unwrap();
        let bracket = b.finish(root).unwrap();
        assert_eq!(bracket.round_count(), 1);
        assert_eq!(bracket.unresolved_count(), 1);
    }

    #[test]
    fn invalid_winner_fails_construction() {
        let mut b = Bracket::builder();
        let err = b.add_match("A", "B", Winner::decided("Z"), pts(1), pts(0)).unwrap_err();
        assert!(matches!(err, BracketError::InvalidWinner { .. }));
        assert!(b.is_empty());
    }

    #[test]
    fn finish_rejects_unknown_root() {
        let b = Bracket::builder();
        let err = b.finish(MatchId(0)).unwrap_err();
        assert!(matches!(err, BracketError::UnknownMatch(MatchId(0))));
    }

    #[test]
    fn finish_rejects_shared_child() {
        let mut b = Bracket::builder();
        let semi = b.add_match("A", "B", Winner::decided("A"), pts(1), pts(0)).unwrap();
        let root = b.add_match(semi, semi, Winner::decided("A"), pts(1), pts(0)).unwrap();
        let err = b.finish(root).unwrap_err();
        assert!(matches!(err, BracketError::MalformedBracket { .. }), "Got: {err:?}");
    }

    #[test]
    fn finish_rejects_orphan() {
        let mut b = Bracket::builder();
        b.add_match("X", "Y", Winner::decided("X"), pts(1), pts(0)).unwrap();
        let root = b.add_match("A", "B", Winner::decided("A"), pts(1), pts(0)).unwrap();
        let err = b.finish(root).unwrap_err();
        assert!(
            matches!(err, BracketError::MalformedBracket { ref reason } if reason.contains("not reachable"))
        );
    }

    #[test]
    fn finish_rejects_inner_root() {
        let mut b = Bracket::builder();
        let semi = b.add_match("A", "B", Winner::decided("A"), pts(1), pts(0)).unwrap();
        b.add_match(semi, "C", Winner::decided("C"), pts(0), pts(1)).unwrap();
        let err = b.finish(semi).unwrap_err();
        assert!(matches!(err, BracketError::MalformedBracket { .. }));
    }

    #[test]
    fn congruent_brackets() {
        let a = four_team(Winner::decided("C"));
        let b = four_team(Winner::Unknown);
        assert!(a.is_congruent(&b));
        assert!(b.is_congruent(&a));
    }

    #[test]
    fn incongruent_reports_first_divergence() {
        let a = four_team(Winner::decided("C"));
        let mut builder = Bracket::builder();
        let semi = builder.add_match("A", "B", Winner::decided("A"), pts(4), pts(0)).unwrap();
        let root = builder.add_match(semi, "C", Winner::decided("C"), pts(2), pts(4)).unwrap();
        let b = builder.finish(root).unwrap();

        let err = a.check_congruent(&b).unwrap_err();
        assert!(matches!(
            err,
            BracketError::ShapeMismatch {
                depth: 0,
                index: 0,
                side: Side::Right
            }
        ));
    }

    #[test]
    fn predict_match_in_builder() {
        let mut b = Bracket::builder();
        let left = b.add_match("A", "B", Winner::decided("B"), pts(60), pts(61)).unwrap();
        let right = b.add_match("C", "D", Winner::decided("C"), pts(70), pts(50)).unwrap();
        let forecast = b.predict_match(left, right, pts(65), pts(65)).unwrap();
        assert_eq!(forecast.predicted_winner(), &Winner::decided("B"));
        assert!(b.predict_match(MatchId(9), right, pts(1), pts(0)).is_err());
    }
}
