//! Round standings and their JSON export.

use std::{cmp::Ordering, path::Path};

use bracketscore_types::{Result, Score, SubmissionId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One submission's line in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub submission_id: SubmissionId,
    pub name: String,
    pub score_on_round: Score,
    pub score_through_round: Score,
    /// `None` until bonuses have been scored.
    pub bonus_points: Option<Decimal>,
}

/// Standings of a challenge for one round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundStandings {
    /// Challenge name from the config.
    pub challenge: String,
    /// Round depth (0 = final).
    pub depth: usize,
    /// Hex SHA-256 of the results bracket the scores were computed from;
    /// `None` if brackets have not been scored yet.
    pub results_digest: Option<String>,
    pub generated_at: DateTime<Utc>,
    /// Best cumulative score first.
    pub entries: Vec<StandingEntry>,
}

/// Determined scores first, highest first; then by name.
pub(crate) fn rank(a: &StandingEntry, b: &StandingEntry) -> Ordering {
    match (
        a.score_through_round.points(),
        b.score_through_round.points(),
    ) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.name.cmp(&b.name))
}

impl RoundStandings {
    /// Save standings to a pretty-printed JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load standings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Entry for a submission, if present.
    #[must_use]
    pub fn entry(&self, id: SubmissionId) -> Option<&StandingEntry> {
        self.entries.iter().find(|e| e.submission_id == id)
    }

    /// Generate a text report.
    #[must_use]
    pub fn generate_report(&self) -> String {
        let mut report = format!(
            "=== {}: round at depth {} ===\n\n{:<24} {:>12} {:>12} {:>8}\n{}\n",
            self.challenge,
            self.depth,
            "Submission",
            "Round",
            "Through",
            "Bonus",
            "-".repeat(60)
        );
        for entry in &self.entries {
            let bonus = entry
                .bonus_points
                .map_or_else(|| "-".to_string(), |b| b.to_string());
            report.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>8}\n",
                entry.name,
                entry.score_on_round.to_string(),
                entry.score_through_round.to_string(),
                bonus
            ));
        }
        report
    }
}
