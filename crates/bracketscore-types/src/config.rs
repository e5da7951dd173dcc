//! Configuration types for bracket challenges.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{BracketError, Result, constants};

/// Configuration for a single bracket challenge pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeConfig {
    /// Name shown in exported standings.
    pub name: String,
    /// Maximum number of submissions accepted.
    pub max_submissions: usize,
    /// Number of bonus answers every submission must carry.
    pub bonus_question_count: usize,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            name: constants::DEFAULT_CHALLENGE_NAME.to_string(),
            max_submissions: constants::DEFAULT_MAX_SUBMISSIONS,
            bonus_question_count: constants::DEFAULT_BONUS_QUESTION_COUNT,
        }
    }
}

impl ChallengeConfig {
    /// Default config with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BracketError::Configuration(
                "challenge name must not be empty".into(),
            ));
        }
        if self.max_submissions == 0 {
            return Err(BracketError::Configuration(
                "max_submissions must be > 0".into(),
            ));
        }
        Ok(())
    }
}
