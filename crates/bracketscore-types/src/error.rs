//! Error types for bracketscore.
//!
//! All errors use the `BS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Bracket construction errors
//! - 2xx: Scoring errors
//! - 3xx: Challenge errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{MatchId, Participant, Side, SubmissionId, Winner};

/// Central error enum for all bracketscore operations.
#[derive(Debug, Error)]
pub enum BracketError {
    // =================================================================
    // Bracket Construction Errors (1xx)
    // =================================================================
    /// The declared winner is neither entrant nor the unknown sentinel.
    #[error("BS_ERR_101: Invalid winner {winner}: must be {left}, {right} or unknown")]
    InvalidWinner {
        winner: Participant,
        left: Winner,
        right: Winner,
    },

    /// A match id does not refer to a match in this bracket.
    #[error("BS_ERR_102: Unknown match: {0}")]
    UnknownMatch(MatchId),

    /// The matches do not form a single tree under the root.
    #[error("BS_ERR_103: Malformed bracket: {reason}")]
    MalformedBracket { reason: String },

    // =================================================================
    // Scoring Errors (2xx)
    // =================================================================
    /// Prediction and results disagree on nested-match vs participant.
    #[error(
        "BS_ERR_200: Bracket shape mismatch at depth {depth}, match {index}, {side} entrant"
    )]
    ShapeMismatch {
        depth: usize,
        index: usize,
        side: Side,
    },

    // =================================================================
    // Challenge Errors (3xx)
    // =================================================================
    /// A submission with this name is already registered.
    #[error("BS_ERR_300: Duplicate submission name: {0}")]
    DuplicateSubmission(String),

    /// The challenge already holds `max_submissions` entries.
    #[error("BS_ERR_301: Submission limit reached: {limit}")]
    SubmissionLimitReached { limit: usize },

    /// The submission answers a different number of bonus questions.
    #[error("BS_ERR_302: Expected {expected} bonus answers, got {actual}")]
    BonusAnswerCount { expected: usize, actual: usize },

    /// The bonus formula returned the wrong number of rows.
    #[error("BS_ERR_303: Bonus formula returned {actual} rows for {expected} submissions")]
    BonusFormulaMismatch { expected: usize, actual: usize },

    /// No submission with this id is registered.
    #[error("BS_ERR_304: Submission not found: {0}")]
    SubmissionNotFound(SubmissionId),

    /// A bonus score row does not have one entry per bonus question.
    #[error("BS_ERR_305: Bonus formula returned {actual} scores in row {row}, expected {expected}")]
    BonusRowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("BS_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid values, missing fields, etc.).
    #[error("BS_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("BS_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, BracketError>;

impl From<std::io::Error> for BracketError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BracketError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
