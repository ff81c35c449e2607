//! Leaderboard sync client.
//!
//! One POST both submits the player's score and returns the updated ranking.
//! Failures here degrade the session to unsynced play; they are logged and
//! never propagated.

use anyhow::{Context, anyhow, bail};
use clickstorm_game::{LeaderboardEntry, ScoreSubmission};
use wasm_bindgen_futures::JsFuture;

use crate::dom::{js_error_message, post_json};

/// Endpoint serving the shared leaderboard, relative to the page.
pub const ENDPOINT: &str = "leaderboard.php";

/// Submit the floored score and return the ranked rows.
///
/// # Errors
///
/// Returns an error when the request cannot be sent, the server answers with
/// a non-success status, or the payload does not decode.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn submit_score(username: &str, score: f64) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let submission = ScoreSubmission {
        username: username.to_string(),
        score: score.floor(),
    };
    let body = serde_json::to_string(&submission).context("encoding score submission")?;

    let response = post_json(ENDPOINT, &body)
        .await
        .map_err(|err| anyhow!("leaderboard request failed: {}", js_error_message(&err)))?;
    if !response.ok() {
        bail!("leaderboard request failed with status {}", response.status());
    }

    let json_promise = response
        .json()
        .map_err(|err| anyhow!("leaderboard response unreadable: {}", js_error_message(&err)))?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|err| anyhow!("leaderboard response unreadable: {}", js_error_message(&err)))?;
    serde_wasm_bindgen::from_value(json)
        .map_err(|err| anyhow!("invalid leaderboard payload: {err}"))
}
