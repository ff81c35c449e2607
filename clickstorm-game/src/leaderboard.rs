//! Leaderboard contract: submission payloads, score normalization, and the
//! numeric-string ordering the shared store ranks by.
//!
//! The remote store keeps scores as decimal digit strings so totals beyond
//! 2^53 stay exact; every comparison here goes through [`cmp_scores`] instead
//! of floating point.

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

/// Ranked responses are capped at this many rows.
pub const MAX_ROWS: usize = 100;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LeaderboardError {
    #[error("invalid score value: {0}")]
    InvalidScore(f64),
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),
}

/// Request body pushed to the leaderboard endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub username: String,
    /// Floored currency at submission time.
    pub score: f64,
}

/// One ranked row of the leaderboard response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    /// Decimal digit string; the store serves strings but historic rows may
    /// still carry numbers.
    #[serde(deserialize_with = "score_as_string")]
    pub score: String,
    pub last_updated: String,
}

fn score_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Text(String),
        Number(f64),
    }
    match RawScore::deserialize(deserializer)? {
        RawScore::Text(text) => Ok(text),
        RawScore::Number(value) => normalize_score(value).map_err(serde::de::Error::custom),
    }
}

/// Validate a score and render it as a plain decimal digit string, matching
/// the server-side normalization. Scientific notation never leaks through.
///
/// # Errors
///
/// Returns `InvalidScore` for negative or non-finite values.
pub fn normalize_score(value: f64) -> Result<String, LeaderboardError> {
    if !value.is_finite() || value < 0.0 {
        return Err(LeaderboardError::InvalidScore(value));
    }
    Ok(format!("{:.0}", value.floor()))
}

/// Compare two decimal digit strings numerically. Correct far beyond 2^53,
/// where parsing back to `f64` would collapse distinct scores.
#[must_use]
pub fn cmp_scores(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[derive(Debug, Clone)]
struct StoredRow {
    score: String,
    last_updated: String,
}

/// In-memory model of the shared leaderboard store.
///
/// Mirrors the remote endpoint's semantics: upsert keyed by username that
/// keeps the maximum of the existing and submitted score, ranked reads capped
/// at [`MAX_ROWS`]. Pins the contract in tests and backs the dev loop when no
/// server is around.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardTable {
    rows: HashMap<String, StoredRow>,
}

impl LeaderboardTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and upsert a submission, then return the updated ranking.
    ///
    /// # Errors
    ///
    /// Returns the validation failure the server would answer 400 to: an
    /// empty username or a negative/non-finite score.
    pub fn submit(
        &mut self,
        submission: &ScoreSubmission,
        now: &str,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        if submission.username.trim().is_empty() {
            return Err(LeaderboardError::InvalidRequest("username is empty"));
        }
        let score = normalize_score(submission.score)?;

        match self.rows.get_mut(&submission.username) {
            Some(row) => {
                if cmp_scores(&score, &row.score) == Ordering::Greater {
                    log::info!(
                        "new high score: username={} score={} previous={}",
                        submission.username,
                        score,
                        row.score
                    );
                    row.score = score;
                }
                row.last_updated = now.to_string();
            }
            None => {
                log::info!(
                    "new high score: username={} score={score} previous=0",
                    submission.username
                );
                self.rows.insert(
                    submission.username.clone(),
                    StoredRow {
                        score,
                        last_updated: now.to_string(),
                    },
                );
            }
        }
        Ok(self.ranked())
    }

    /// Rows in descending score order, capped at [`MAX_ROWS`]. Ties break by
    /// username so the ranking is deterministic.
    #[must_use]
    pub fn ranked(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .rows
            .iter()
            .map(|(username, row)| LeaderboardEntry {
                username: username.clone(),
                score: row.score.clone(),
                last_updated: row.last_updated.clone(),
            })
            .collect();
        entries.sort_by(|a, b| {
            cmp_scores(&b.score, &a.score).then_with(|| a.username.cmp(&b.username))
        });
        entries.truncate(MAX_ROWS);
        entries
    }
}
