//! A single entry in a bracket challenge.

use bracketscore_core::BracketPrediction;
use bracketscore_types::SubmissionId;
use rust_decimal::Decimal;

/// One participant's bracket prediction plus their bonus answers.
#[derive(Debug, Clone)]
pub struct PredictionSubmission {
    id: SubmissionId,
    name: String,
    bracket: BracketPrediction,
    bonus_answers: Vec<String>,
    /// One entry per bonus answer, set by the last bonus scoring pass.
    bonus_scores: Option<Vec<Decimal>>,
}

impl PredictionSubmission {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, bracket: BracketPrediction, bonus_answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: SubmissionId::new(),
            name: name.into(),
            bracket,
            bonus_answers: bonus_answers.into_iter().map(Into::into).collect(),
            bonus_scores: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bracket(&self) -> &BracketPrediction {
        &self.bracket
    }

    pub(crate) fn bracket_mut(&mut self) -> &mut BracketPrediction {
        &mut self.bracket
    }

    #[must_use]
    pub fn bonus_answers(&self) -> &[String] {
        &self.bonus_answers
    }

    #[must_use]
    pub fn bonus_scores(&self) -> Option<&[Decimal]> {
        self.bonus_scores.as_deref()
    }

    pub(crate) fn set_bonus_scores(&mut self, scores: Vec<Decimal>) {
        self.bonus_scores = Some(scores);
    }

    /// Sum of the bonus scores, once bonuses have been scored.
    #[must_use]
    pub fn bonus_total(&self) -> Option<Decimal> {
        self.bonus_scores.as_ref().map(|s| s.iter().copied().sum())
    }
}
