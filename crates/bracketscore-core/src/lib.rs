//! # bracketscore-core
//!
//! **Bracket model and prediction scoring.**
//!
//! A bracket is an arena of [`Match`] nodes with one root, the final.
//! Depth counts edges from the root: the final is depth 0, semifinals
//! depth 1, and so on toward the earliest round.
//!
//! [`BracketPrediction::score`] walks a prediction and a [`BracketResult`]
//! breadth-first in lockstep, assigns every predicted match a [`Score`]
//! through a caller-supplied formula, and records one total per round:
//!
//! ```text
//! score(results, formula(prediction, actual, depth) -> Decimal)
//!     -> per-match scores + scores_on_rounds[depth]
//! ```
//!
//! The crate has no I/O. Distinct predictions can be scored on different
//! threads against a shared `&BracketResult`.
//!
//! [`Score`]: bracketscore_types::Score

pub mod bracket;
pub mod digest;
pub mod matchup;
pub mod nested;
pub mod prediction;
pub mod result;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fixtures;

pub use bracket::{Bracket, BracketBuilder};
pub use digest::{bracket_digest_hex, compute_bracket_digest, verify_bracket_digest};
pub use matchup::{Entrant, Match, MatchPrediction};
pub use nested::{NestedEntrant, NestedMatch};
pub use prediction::BracketPrediction;
pub use result::BracketResult;
