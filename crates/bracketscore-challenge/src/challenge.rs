//! Bracket challenge pool.
//!
//! Every submission is scored independently and identically against the
//! shared results. Shape congruence is checked when a submission is added
//! and when the results are replaced, so `score_brackets` only fails if a
//! formula-independent invariant was broken.

use std::path::Path;

use bracketscore_core::{BracketResult, Match, bracket_digest_hex};
use bracketscore_types::{BracketError, ChallengeConfig, Result, SubmissionId};
use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    PredictionSubmission,
    standings::{self, RoundStandings, StandingEntry},
};

/// Scores one predicted match against its actual counterpart at a depth.
pub type BracketFormula = Box<dyn Fn(&Match, &Match, usize) -> Decimal + Send + Sync>;

/// Scores every submission's bonus answers; one row per submission.
pub type BonusFormula = Box<dyn Fn(&[Vec<String>]) -> Vec<Vec<Decimal>> + Send + Sync>;

/// A pool of bracket predictions sharing one results bracket.
pub struct BracketChallenge {
    config: ChallengeConfig,
    results: BracketResult,
    bracket_formula: BracketFormula,
    bonus_formula: BonusFormula,
    submissions: Vec<PredictionSubmission>,
    /// Digest of the results the last successful `score_brackets` used.
    scored_against: Option<String>,
}

impl BracketChallenge {
    pub fn new(
        config: ChallengeConfig,
        results: BracketResult,
        bracket_formula: impl Fn(&Match, &Match, usize) -> Decimal + Send + Sync + 'static,
        bonus_formula: impl Fn(&[Vec<String>]) -> Vec<Vec<Decimal>> + Send + Sync + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            results,
            bracket_formula: Box::new(bracket_formula),
            bonus_formula: Box::new(bonus_formula),
            submissions: Vec::new(),
            scored_against: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    #[must_use]
    pub fn results(&self) -> &BracketResult {
        &self.results
    }

    /// Register a submission.
    ///
    /// # Errors
    /// - [`BracketError::SubmissionLimitReached`] when the pool is full
    /// - [`BracketError::DuplicateSubmission`] for a name already taken
    /// - [`BracketError::BonusAnswerCount`] for the wrong number of answers
    /// - [`BracketError::ShapeMismatch`] if the bracket cannot be scored
    ///   against the results
    pub fn add_submission(&mut self, submission: PredictionSubmission) -> Result<SubmissionId> {
        if self.submissions.len() >= self.config.max_submissions {
            return Err(BracketError::SubmissionLimitReached {
                limit: self.config.max_submissions,
            });
        }
        if self.submissions.iter().any(|s| s.name() == submission.name()) {
            return Err(BracketError::DuplicateSubmission(submission.name().to_string()));
        }
        let answers = submission.bonus_answers().len();
        if answers != self.config.bonus_question_count {
            return Err(BracketError::BonusAnswerCount {
                expected: self.config.bonus_question_count,
                actual: answers,
            });
        }
        if let Err(err) = submission
            .bracket()
            .bracket()
            .check_congruent(self.results.bracket())
        {
            tracing::warn!(name = submission.name(), error = %err, "Submission rejected");
            return Err(err);
        }

        let id = submission.id();
        tracing::info!(
            challenge = %self.config.name,
            submission = %id,
            name = submission.name(),
            "Submission added"
        );
        self.submissions.push(submission);
        Ok(id)
    }

    pub fn remove_submission(&mut self, id: SubmissionId) -> Result<PredictionSubmission> {
        let pos = self
            .submissions
            .iter()
            .position(|s| s.id() == id)
            .ok_or(BracketError::SubmissionNotFound(id))?;
        Ok(self.submissions.remove(pos))
    }

    pub fn submission(&self, id: SubmissionId) -> Result<&PredictionSubmission> {
        self.submissions
            .iter()
            .find(|s| s.id() == id)
            .ok_or(BracketError::SubmissionNotFound(id))
    }

    #[must_use]
    pub fn submissions(&self) -> &[PredictionSubmission] {
        &self.submissions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Replace the results, e.g. after another round has been played.
    ///
    /// Bracket scores from the previous results stay until the next
    /// [`score_brackets`](Self::score_brackets), and standings keep naming
    /// the digest of the results they were computed from.
    ///
    /// # Errors
    /// [`BracketError::ShapeMismatch`] if any registered bracket has a
    /// different shape; the old results are kept.
    pub fn update_results(&mut self, results: BracketResult) -> Result<()> {
        for submission in &self.submissions {
            submission
                .bracket()
                .bracket()
                .check_congruent(results.bracket())?;
        }
        tracing::info!(
            challenge = %self.config.name,
            unresolved = results.unresolved_count(),
            "Results updated"
        );
        self.results = results;
        Ok(())
    }

    /// Score every submission's bracket against the current results.
    pub fn score_brackets(&mut self) -> Result<()> {
        self.scored_against = None;
        let results = &self.results;
        let formula = &self.bracket_formula;
        for submission in &mut self.submissions {
            submission
                .bracket_mut()
                .score(results, |prediction, actual, depth| {
                    formula(prediction, actual, depth)
                })?;
        }
        let digest = bracket_digest_hex(results.bracket());
        tracing::info!(
            challenge = %self.config.name,
            submissions = self.submissions.len(),
            results_digest = %digest,
            "Brackets scored"
        );
        self.scored_against = Some(digest);
        Ok(())
    }

    /// Score all bonus answers in one call to the bonus formula.
    ///
    /// # Errors
    /// [`BracketError::BonusFormulaMismatch`] if the formula does not return
    /// exactly one row per submission, or [`BracketError::BonusRowWidth`] if
    /// a row does not hold one score per bonus question. Nothing is stored in
    /// either case.
    pub fn score_bonuses(&mut self) -> Result<()> {
        let answers: Vec<Vec<String>> = self
            .submissions
            .iter()
            .map(|s| s.bonus_answers().to_vec())
            .collect();
        let rows = (self.bonus_formula)(&answers);
        if rows.len() != self.submissions.len() {
            return Err(BracketError::BonusFormulaMismatch {
                expected: self.submissions.len(),
                actual: rows.len(),
            });
        }
        let expected = self.config.bonus_question_count;
        if let Some((row, scores)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(BracketError::BonusRowWidth {
                row,
                expected,
                actual: scores.len(),
            });
        }
        for (submission, row) in self.submissions.iter_mut().zip(rows) {
            submission.set_bonus_scores(row);
        }
        tracing::info!(
            challenge = %self.config.name,
            submissions = self.submissions.len(),
            "Bonuses scored"
        );
        Ok(())
    }

    /// Standings for the round at `depth` (0 = final).
    #[must_use]
    pub fn results_for_round(&self, depth: usize) -> RoundStandings {
        let mut entries: Vec<StandingEntry> = self
            .submissions
            .iter()
            .map(|s| StandingEntry {
                submission_id: s.id(),
                name: s.name().to_string(),
                score_on_round: s.bracket().score_on_round(depth),
                score_through_round: s.bracket().score_through_round(depth),
                bonus_points: s.bonus_total(),
            })
            .collect();
        entries.sort_by(standings::rank);

        RoundStandings {
            challenge: self.config.name.clone(),
            depth,
            results_digest: self.scored_against.clone(),
            generated_at: Utc::now(),
            entries,
        }
    }

    /// Compute standings for a round and write them as JSON to `path`.
    pub fn write_results_for_round(&self, depth: usize, path: &Path) -> Result<()> {
        let standings = self.results_for_round(depth);
        standings.save(path)?;
        tracing::info!(
            challenge = %self.config.name,
            depth,
            path = %path.display(),
            entries = standings.entries.len(),
            "Round results written"
        );
        Ok(())
    }
}

impl std::fmt::Debug for BracketChallenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BracketChallenge")
            .field("config", &self.config)
            .field("results", &self.results)
            .field("submissions", &self.submissions.len())
            .finish_non_exhaustive()
    }
}
