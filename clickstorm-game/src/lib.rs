//! Clickstorm Progression Engine
//!
//! Platform-agnostic core logic for the Clickstorm incremental clicker.
//! This crate provides the progression state machine, purchase economy,
//! cheat sequence detection, score formatting and the leaderboard contract
//! without UI or platform-specific dependencies.

pub mod cheat;
pub mod economy;
pub mod format;
pub mod leaderboard;
pub mod skins;
pub mod state;

// Re-export commonly used types
pub use cheat::{CheatSequenceDetector, KeyStroke, SECRET};
pub use economy::{
    FLUSH_INTERVAL_MS, SYNC_INTERVAL_MS, SkinSelection, TICK_INTERVAL_MS, auto_tick,
    buy_auto_unit, buy_multiplier, click, select_skin,
};
pub use format::{format_compact, format_grouped, number_to_words};
pub use leaderboard::{
    LeaderboardEntry, LeaderboardError, LeaderboardTable, MAX_ROWS, ScoreSubmission, cmp_scores,
    normalize_score,
};
pub use skins::{DEFAULT_SKIN_ID, Skin, SkinCatalog, SkinPrice, default_catalog};
pub use state::{BASE_AUTO_UNIT_COST, BASE_MULTIPLIER_COST, Progress, ProgressError};

/// Trait for abstracting progression persistence.
/// Platform-specific implementations should provide this.
pub trait ProgressStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a snapshot of the progression record.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, progress: &Progress) -> Result<(), Self::Error>;

    /// Load the persisted snapshot, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a snapshot exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<Progress>, Self::Error>;

    /// Delete the persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Load saved progress, repairing what can be repaired and falling back to
/// defaults otherwise. A broken store never propagates to the caller.
pub fn load_or_default<S: ProgressStore>(store: &S) -> Progress {
    match store.load() {
        Ok(Some(mut progress)) => {
            progress.sanitize();
            log::info!(
                "progress loaded: currency={} auto_units={} auto_unit_cost={}",
                progress.currency,
                progress.auto_units,
                progress.auto_unit_cost
            );
            progress
        }
        Ok(None) => Progress::default(),
        Err(err) => {
            log::error!("failed to load saved progress: {err}");
            Progress::default()
        }
    }
}
