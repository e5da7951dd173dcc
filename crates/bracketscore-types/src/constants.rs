//! System-wide constants for bracketscore.

/// Textual form of an undecided winner in serialized brackets.
pub const UNKNOWN_WINNER_LABEL: &str = "?";

/// Default maximum number of submissions accepted by one challenge.
pub const DEFAULT_MAX_SUBMISSIONS: usize = 10_000;

/// Default number of bonus questions per challenge.
pub const DEFAULT_BONUS_QUESTION_COUNT: usize = 0;

/// Default challenge name.
pub const DEFAULT_CHALLENGE_NAME: &str = "bracket-challenge";

/// Domain separator for bracket digests.
pub const BRACKET_DIGEST_DOMAIN: &[u8] = b"bracketscore:bracket:v1:";
