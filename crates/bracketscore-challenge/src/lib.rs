//! # bracketscore-challenge
//!
//! **Challenge pools** built on the scoring core.
//!
//! A [`BracketChallenge`] holds one shared [`BracketResult`] and many
//! [`PredictionSubmission`]s. Each submission's bracket is scored
//! independently against the results with the challenge's formula; bonus
//! answers are scored in one batch by a separate formula.
//!
//! ## Flow
//!
//! ```text
//! add_submission() → score_brackets() → score_bonuses()
//!     → results_for_round(depth) → RoundStandings → JSON file
//! ```
//!
//! [`BracketResult`]: bracketscore_core::BracketResult

pub mod challenge;
pub mod formulas;
pub mod standings;
pub mod submission;

pub use challenge::{BonusFormula, BracketChallenge, BracketFormula};
pub use standings::{RoundStandings, StandingEntry};
pub use submission::PredictionSubmission;
