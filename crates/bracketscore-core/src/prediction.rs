//! Bracket prediction and its round-synchronous scoring pass.
//!
//! ## Algorithm
//!
//! 1. Clear every match slot and the round ledger
//! 2. Walk prediction and results breadth-first in lockstep, one depth
//!    (round) at a time, starting at the final
//! 3. For each corresponding pair, check that both agree on which entrants
//!    are nested matches; fail at the first divergence
//! 4. Unknown actual winner: the match is `Pending` and adds nothing to
//!    the round. Otherwise the formula's value is stored and summed
//! 5. Record the round total, or `Pending` if no match in the round had a
//!    known outcome
//!
//! Results are built in local buffers and only committed once the whole
//! walk succeeds, so a failed pass never leaves a partial ledger behind.

use bracketscore_types::{MatchId, Result, Score};
use rust_decimal::Decimal;

use crate::{Bracket, BracketResult, Match, bracket::pair_children};

/// A forecast bracket together with the scores from its last scoring pass.
#[derive(Debug, Clone)]
pub struct BracketPrediction {
    bracket: Bracket,
    /// One slot per arena entry of `bracket`.
    match_scores: Vec<Score>,
    /// Indexed by depth; only `Pending` or `Points` once scored.
    scores_on_rounds: Vec<Score>,
}

impl BracketPrediction {
    #[must_use]
    pub fn new(bracket: Bracket) -> Self {
        let match_scores = vec![Score::Unscored; bracket.match_count()];
        Self {
            bracket,
            match_scores,
            scores_on_rounds: Vec::new(),
        }
    }

    #[must_use]
    pub fn bracket(&self) -> &Bracket {
        &self.bracket
    }

    /// Score this prediction against `results`, replacing any previous
    /// scoring.
    ///
    /// `formula(prediction, actual, depth)` is called once per pair whose
    /// actual outcome is known.
    ///
    /// # Errors
    /// Returns [`BracketError::ShapeMismatch`] if the two trees differ in
    /// shape. The prediction is left cleared in that case.
    ///
    /// [`BracketError::ShapeMismatch`]: bracketscore_types::BracketError::ShapeMismatch
    pub fn score<F>(&mut self, results: &BracketResult, formula: F) -> Result<()>
    where
        F: Fn(&Match, &Match, usize) -> Decimal,
    {
        self.clear();

        let actual = results.bracket();
        let mut match_scores = vec![Score::Unscored; self.bracket.match_count()];
        let mut scores_on_rounds = Vec::new();

        let mut prediction_round = vec![self.bracket.root_id()];
        let mut results_round = vec![actual.root_id()];
        let mut depth = 0;

        while !prediction_round.is_empty() {
            let mut next_prediction_round = Vec::with_capacity(prediction_round.len() * 2);
            let mut next_results_round = Vec::with_capacity(results_round.len() * 2);
            let mut round_total = Decimal::ZERO;
            let mut round_has_score = false;

            for (index, (&predicted_id, &actual_id)) in
                prediction_round.iter().zip(&results_round).enumerate()
            {
                let predicted = self.bracket.node(predicted_id);
                let actual_match = actual.node(actual_id);

                if let Err(err) = pair_children(
                    depth,
                    index,
                    predicted,
                    actual_match,
                    &mut next_prediction_round,
                    &mut next_results_round,
                ) {
                    tracing::warn!(depth, index, error = %err, "Scoring aborted on shape mismatch");
                    return Err(err);
                }

                match_scores[predicted_id.index()] = if actual_match.is_decided() {
                    let points = formula(predicted, actual_match, depth);
                    round_total += points;
                    round_has_score = true;
                    Score::Points(points)
                } else {
                    Score::Pending
                };
            }

            let round_score = if round_has_score {
                Score::Points(round_total)
            } else {
                Score::Pending
            };
            tracing::debug!(depth, matches = prediction_round.len(), score = %round_score, "Round scored");
            scores_on_rounds.push(round_score);

            prediction_round = next_prediction_round;
            results_round = next_results_round;
            depth += 1;
        }

        self.match_scores = match_scores;
        self.scores_on_rounds = scores_on_rounds;

        tracing::info!(
            rounds = self.scores_on_rounds.len(),
            total = %self.score_through_round(0),
            "Bracket prediction scored"
        );
        Ok(())
    }

    /// Drop every match score and the round ledger.
    pub fn clear(&mut self) {
        self.match_scores.fill(Score::Unscored);
        self.scores_on_rounds.clear();
    }

    /// Score of one round. `Unscored` outside the ledger, including before
    /// the first scoring pass.
    #[must_use]
    pub fn score_on_round(&self, depth: usize) -> Score {
        self.scores_on_rounds
            .get(depth)
            .copied()
            .unwrap_or(Score::Unscored)
    }

    /// Sum of the rounds from `depth` through the earliest round (deepest
    /// depth), inclusive.
    ///
    /// `Unscored` before the first scoring pass; `Pending` if any round in
    /// range is still pending. A `depth` past the earliest round is an empty
    /// range and totals zero.
    #[must_use]
    pub fn score_through_round(&self, depth: usize) -> Score {
        if self.scores_on_rounds.is_empty() {
            return Score::Unscored;
        }
        let rounds = self.scores_on_rounds.get(depth..).unwrap_or_default();
        let mut total = Decimal::ZERO;
        for round in rounds {
            match round {
                Score::Points(points) => total += *points,
                Score::Pending | Score::Unscored => return Score::Pending,
            }
        }
        Score::Points(total)
    }

    /// Score of a single predicted match from the last pass.
    #[must_use]
    pub fn match_score(&self, id: MatchId) -> Score {
        self.match_scores
            .get(id.index())
            .copied()
            .unwrap_or(Score::Unscored)
    }

    /// Number of rounds in the ledger; zero until scored.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.scores_on_rounds.len()
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        !self.scores_on_rounds.is_empty()
    }
}

impl From<Bracket> for BracketPrediction {
    fn from(bracket: Bracket) -> Self {
        Self::new(bracket)
    }
}
