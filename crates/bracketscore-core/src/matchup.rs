//! Match nodes: authoritative/predicted [`Match`] and standalone
//! [`MatchPrediction`].
//!
//! Both node types derive their two participant labels when built: the
//! label itself for a terminal entrant, or the winner of the nested match
//! (which may still be unknown).

use bracketscore_types::{
    BracketError, MatchId, Participant, Result, Score, Winner, constants::UNKNOWN_WINNER_LABEL,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One side of a match: a nested match in the same bracket, or a terminal
/// participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entrant {
    Match(MatchId),
    Participant(Participant),
}

impl Entrant {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    #[must_use]
    pub fn match_id(&self) -> Option<MatchId> {
        match self {
            Self::Match(id) => Some(*id),
            Self::Participant(_) => None,
        }
    }
}

impl From<MatchId> for Entrant {
    fn from(id: MatchId) -> Self {
        Self::Match(id)
    }
}

impl From<Participant> for Entrant {
    fn from(participant: Participant) -> Self {
        Self::Participant(participant)
    }
}

impl From<&str> for Entrant {
    fn from(label: &str) -> Self {
        Self::Participant(Participant::new(label))
    }
}

/// Resolve the label an entrant contributes to its parent match.
///
/// The unknown-winner label is reserved and cannot name a participant.
pub(crate) fn resolve_entrant(arena: &[Match], entrant: &Entrant) -> Result<Winner> {
    match entrant {
        Entrant::Participant(p) if p.as_str() == UNKNOWN_WINNER_LABEL => {
            Err(BracketError::MalformedBracket {
                reason: format!("participant label {UNKNOWN_WINNER_LABEL:?} is reserved"),
            })
        }
        Entrant::Participant(p) => Ok(Winner::Decided(p.clone())),
        Entrant::Match(id) => arena
            .get(id.index())
            .map(|m| m.winner.clone())
            .ok_or(BracketError::UnknownMatch(*id)),
    }
}

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// One game of a bracket with its declared winner and final scores.
///
/// Invariant: `winner` is the left participant, the right participant, or
/// [`Winner::Unknown`]. Construction goes through
/// [`BracketBuilder::add_match`](crate::BracketBuilder::add_match), which
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    left: Entrant,
    right: Entrant,
    winner: Winner,
    left_score: Decimal,
    right_score: Decimal,
    left_participant: Winner,
    right_participant: Winner,
}

impl Match {
    pub(crate) fn assemble(
        arena: &[Match],
        left: Entrant,
        right: Entrant,
        winner: Winner,
        left_score: Decimal,
        right_score: Decimal,
    ) -> Result<Self> {
        let left_participant = resolve_entrant(arena, &left)?;
        let right_participant = resolve_entrant(arena, &right)?;

        if let Winner::Decided(declared) = &winner {
            let matches_side = |side: &Winner| side.participant() == Some(declared);
            if !matches_side(&left_participant) && !matches_side(&right_participant) {
                return Err(BracketError::InvalidWinner {
                    winner: declared.clone(),
                    left: left_participant,
                    right: right_participant,
                });
            }
        }

        Ok(Self {
            left,
            right,
            winner,
            left_score,
            right_score,
            left_participant,
            right_participant,
        })
    }

    #[must_use]
    pub fn left(&self) -> &Entrant {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &Entrant {
        &self.right
    }

    #[must_use]
    pub fn winner(&self) -> &Winner {
        &self.winner
    }

    #[must_use]
    pub fn left_score(&self) -> Decimal {
        self.left_score
    }

    #[must_use]
    pub fn right_score(&self) -> Decimal {
        self.right_score
    }

    /// Label of whoever occupies the left slot.
    #[must_use]
    pub fn left_participant(&self) -> &Winner {
        &self.left_participant
    }

    /// Label of whoever occupies the right slot.
    #[must_use]
    pub fn right_participant(&self) -> &Winner {
        &self.right_participant
    }

    /// `true` once the real-world (or predicted) outcome is decided.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !self.winner.is_unknown()
    }
}

// ---------------------------------------------------------------------------
// MatchPrediction
// ---------------------------------------------------------------------------

/// Forecast for a single match made before any real score exists.
///
/// The winner is derived from the predicted scores; the left entrant takes
/// ties. The score slot is set explicitly through [`assign_score`], since a
/// standalone prediction is not part of a bracket traversal.
///
/// [`assign_score`]: MatchPrediction::assign_score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPrediction {
    left: Entrant,
    right: Entrant,
    left_participant: Winner,
    right_participant: Winner,
    predicted_left_score: Decimal,
    predicted_right_score: Decimal,
    predicted_winner: Winner,
    score: Score,
}

impl MatchPrediction {
    /// Forecast between two terminal participants.
    #[must_use]
    pub fn between(
        left: impl Into<Participant>,
        right: impl Into<Participant>,
        predicted_left_score: Decimal,
        predicted_right_score: Decimal,
    ) -> Self {
        let left = left.into();
        let right = right.into();
        Self::from_resolved(
            Winner::from(left.clone()),
            Winner::from(right.clone()),
            Entrant::Participant(left),
            Entrant::Participant(right),
            predicted_left_score,
            predicted_right_score,
        )
    }

    pub(crate) fn assemble(
        arena: &[Match],
        left: Entrant,
        right: Entrant,
        predicted_left_score: Decimal,
        predicted_right_score: Decimal,
    ) -> Result<Self> {
        let left_participant = resolve_entrant(arena, &left)?;
        let right_participant = resolve_entrant(arena, &right)?;
        Ok(Self::from_resolved(
            left_participant,
            right_participant,
            left,
            right,
            predicted_left_score,
            predicted_right_score,
        ))
    }

    fn from_resolved(
        left_participant: Winner,
        right_participant: Winner,
        left: Entrant,
        right: Entrant,
        predicted_left_score: Decimal,
        predicted_right_score: Decimal,
    ) -> Self {
        let predicted_winner = if predicted_left_score >= predicted_right_score {
            left_participant.clone()
        } else {
            right_participant.clone()
        };
        Self {
            left,
            right,
            left_participant,
            right_participant,
            predicted_left_score,
            predicted_right_score,
            predicted_winner,
            score: Score::Unscored,
        }
    }

    #[must_use]
    pub fn left(&self) -> &Entrant {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &Entrant {
        &self.right
    }

    #[must_use]
    pub fn left_participant(&self) -> &Winner {
        &self.left_participant
    }

    #[must_use]
    pub fn right_participant(&self) -> &Winner {
        &self.right_participant
    }

    #[must_use]
    pub fn predicted_left_score(&self) -> Decimal {
        self.predicted_left_score
    }

    #[must_use]
    pub fn predicted_right_score(&self) -> Decimal {
        self.predicted_right_score
    }

    #[must_use]
    pub fn predicted_winner(&self) -> &Winner {
        &self.predicted_winner
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn assign_score(&mut self, points: Decimal) {
        self.score = Score::Points(points);
    }

    pub fn clear_score(&mut self) {
        self.score = Score::Unscored;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn derives_participants_from_labels() {
        let m = Match::assemble(&[], "A".into(), "B".into(), Winner::decided("A"), pts(4), pts(3))
            .unwrap();
        assert_eq!(m.left_participant(), &Winner::decided("A"));
        assert_eq!(m.right_participant(), &Winner::decided("B"));
        assert!(m.is_decided());
    }

    #[test]
    fn derives_participants_from_nested_winners() {
        let semi = Match::assemble(&[], "A".into(), "B".into(), Winner::decided("B"), pts(1), pts(2))
            .unwrap();
        let arena = vec![semi];
        let final_match = Match::assemble(
            &arena,
            MatchId(0).into(),
            "C".into(),
            Winner::decided("B"),
            pts(3),
            pts(0),
        )
        .unwrap();
        assert_eq!(final_match.left_participant(), &Winner::decided("B"));
        assert_eq!(final_match.left().match_id(), Some(MatchId(0)));
    }

    #[test]
    fn rejects_winner_outside_match() {
        let err = Match::assemble(&[], "A".into(), "B".into(), Winner::decided("C"), pts(1), pts(0))
            .unwrap_err();
        assert!(matches!(err, BracketError::InvalidWinner { .. }), "Got: {err:?}");
    }

    #[test]
    fn unknown_winner_always_allowed() {
        let m = Match::assemble(&[], "A".into(), "B".into(), Winner::Unknown, pts(0), pts(0))
            .unwrap();
        assert!(!m.is_decided());
    }

    #[test]
    fn decided_winner_cannot_come_from_unknown_side() {
        let semi = Match::assemble(&[], "A".into(), "B".into(), Winner::Unknown, pts(0), pts(0))
            .unwrap();
        let arena = vec![semi];
        let err = Match::assemble(
            &arena,
            MatchId(0).into(),
            "C".into(),
            Winner::decided("A"),
            pts(2),
            pts(1),
        )
        .unwrap_err();
        assert!(matches!(err, BracketError::InvalidWinner { .. }));
    }

    #[test]
    fn unknown_label_is_not_a_participant() {
        let err = Match::assemble(&[], "?".into(), "B".into(), Winner::decided("B"), pts(0), pts(1))
            .unwrap_err();
        assert!(matches!(err, BracketError::MalformedBracket { .. }), "Got: {err:?}");
        let err = MatchPrediction::assemble(&[], "A".into(), "?".into(), pts(1), pts(0))
            .unwrap_err();
        assert!(matches!(err, BracketError::MalformedBracket { .. }));
    }

    #[test]
    fn unknown_child_id_rejected() {
        let err = Match::assemble(&[], MatchId(5).into(), "B".into(), Winner::Unknown, pts(0), pts(0))
            .unwrap_err();
        assert!(matches!(err, BracketError::UnknownMatch(MatchId(5))));
    }

    #[test]
    fn prediction_winner_follows_scores() {
        let p = MatchPrediction::between("A", "B", pts(1), pts(2));
        assert_eq!(p.predicted_winner(), &Winner::decided("B"));
        let p = MatchPrediction::between("A", "B", pts(70), pts(64));
        assert_eq!(p.predicted_winner(), &Winner::decided("A"));
    }

    #[test]
    fn prediction_tie_goes_left() {
        let p = MatchPrediction::between("A", "B", pts(3), pts(3));
        assert_eq!(p.predicted_winner(), &Winner::decided("A"));
    }

    #[test]
    fn prediction_score_slot() {
        let mut p = MatchPrediction::between("A", "B", pts(3), pts(1));
        assert_eq!(p.score(), Score::Unscored);
        p.assign_score(pts(10));
        assert_eq!(p.score(), Score::Points(pts(10)));
        p.assign_score(pts(-2));
        assert_eq!(p.score(), Score::Points(pts(-2)));
        p.clear_score();
        assert_eq!(p.score(), Score::Unscored);
    }

    #[test]
    fn prediction_over_undecided_nested_match() {
        let semi = Match::assemble(&[], "A".into(), "B".into(), Winner::Unknown, pts(0), pts(0))
            .unwrap();
        let arena = vec![semi];
        let p = MatchPrediction::assemble(&arena, MatchId(0).into(), "C".into(), pts(2), pts(1))
            .unwrap();
        assert_eq!(p.predicted_winner(), &Winner::Unknown);
        assert_eq!(p.right_participant(), &Winner::decided("C"));
    }
}
