//! # bracketscore-types
//!
//! Shared types, errors, and configuration for **bracketscore**.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`MatchId`], [`SubmissionId`]
//! - **Participants**: [`Participant`], [`Winner`]
//! - **Scores**: [`Score`], the three-state match/round score
//! - **Configuration**: [`ChallengeConfig`]
//! - **Errors**: [`BracketError`] with `BS_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod participant;
pub mod score;

pub use config::*;
pub use error::*;
pub use ids::*;
pub use participant::*;
pub use score::*;

// Constants are accessed via `bracketscore_types::constants::FOO`.
