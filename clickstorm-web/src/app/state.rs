//! Shared application state.
//!
//! The authoritative `Progress` record lives in an `Rc<RefCell<..>>` so the
//! timer closures and user callbacks all mutate the same value; a revision
//! counter is bumped after every mutation to schedule a re-render.

use clickstorm_game::{CheatSequenceDetector, LeaderboardEntry, Progress, SkinCatalog};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    /// Authoritative progression record shared with timers and callbacks.
    pub progress: Rc<RefCell<Progress>>,
    /// Re-render trigger; never read for its value.
    pub revision: UseStateHandle<u64>,
    /// Monotone counter backing `revision`, shared so stale handles cannot
    /// repeat a value.
    pub revision_counter: Rc<RefCell<u64>>,
    /// Mutation-since-last-flush gate for the persistence timer.
    pub dirty: Rc<RefCell<bool>>,
    pub detector: Rc<RefCell<CheatSequenceDetector>>,
    pub catalog: &'static SkinCatalog,
    pub name_draft: UseStateHandle<String>,
    /// Pointer currently held down on the click area.
    pub pressed: UseStateHandle<bool>,
    pub show_skins: UseStateHandle<bool>,
    pub show_sigma: UseStateHandle<bool>,
    pub show_leaderboard: UseStateHandle<bool>,
    pub leaderboard_rows: UseStateHandle<Vec<LeaderboardEntry>>,
}

fn initial_progress() -> Progress {
    #[cfg(target_arch = "wasm32")]
    {
        clickstorm_game::load_or_default(&crate::storage::LocalStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Progress::default()
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        progress: use_mut_ref(initial_progress),
        revision: use_state(|| 0_u64),
        revision_counter: use_mut_ref(|| 0_u64),
        dirty: use_mut_ref(|| false),
        detector: use_mut_ref(CheatSequenceDetector::default),
        catalog: clickstorm_game::default_catalog(),
        name_draft: use_state(String::new),
        pressed: use_state(|| false),
        show_skins: use_state(|| false),
        show_sigma: use_state(|| false),
        show_leaderboard: use_state(|| false),
        leaderboard_rows: use_state(Vec::<LeaderboardEntry>::new),
    }
}

impl AppState {
    /// Schedule a re-render after a mutation of the shared record.
    pub fn bump(&self) {
        let mut counter = self.revision_counter.borrow_mut();
        *counter += 1;
        self.revision.set(*counter);
    }

    /// Record a mutation worth flushing to durable storage, and re-render.
    pub fn mark_mutated(&self) {
        *self.dirty.borrow_mut() = true;
        self.bump();
    }

    /// Clone of the current progression record for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Progress {
        self.progress.borrow().clone()
    }
}
