//! Callback builders wiring user input to the progression state machine.
//!
//! Builders only capture handles, so they stay testable without a browser;
//! everything touching localStorage or the network is wasm-gated.

use clickstorm_game::{KeyStroke, Progress, SkinSelection, economy};
use yew::prelude::*;

use crate::app::state::AppState;

/// Flush a snapshot to durable storage, logging instead of surfacing errors.
pub(crate) fn persist(progress: &Progress) {
    #[cfg(target_arch = "wasm32")]
    {
        use clickstorm_game::ProgressStore;
        if let Err(err) = crate::storage::LocalStore.save(progress) {
            log::error!("saving progress failed: {err}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = progress;
    }
}

/// Pointer pressed on the click area: credit one click and swap the image.
pub fn build_press(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        economy::click(&mut state.progress.borrow_mut());
        state.pressed.set(true);
        state.mark_mutated();
    })
}

/// Pointer released or left the click area.
pub fn build_release(state: &AppState) -> Callback<()> {
    let pressed = state.pressed.clone();
    Callback::from(move |()| pressed.set(false))
}

pub fn build_buy_auto_unit(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let purchased = economy::buy_auto_unit(&mut state.progress.borrow_mut());
        if purchased {
            persist(&state.progress.borrow());
            state.bump();
        }
    })
}

pub fn build_buy_multiplier(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let purchased = economy::buy_multiplier(&mut state.progress.borrow_mut());
        if purchased {
            persist(&state.progress.borrow());
            state.bump();
        }
    })
}

/// Select, purchase or claim a skin from either modal.
pub fn build_select_skin(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |skin_id: String| {
        let outcome = economy::select_skin(&mut state.progress.borrow_mut(), state.catalog, &skin_id);
        match outcome {
            SkinSelection::Switched | SkinSelection::Purchased | SkinSelection::Claimed { .. } => {
                persist(&state.progress.borrow());
                state.bump();
            }
            SkinSelection::Denied | SkinSelection::Unknown => {}
        }
    })
}

/// Commit the drafted player name. Empty drafts are ignored.
pub fn build_submit_name(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let draft = (*state.name_draft).clone();
        let result = state.progress.borrow_mut().set_player_name(&draft);
        match result {
            Ok(()) => {
                log::info!("new player started: name={}", draft.trim());
                persist(&state.progress.borrow());
                state.bump();
            }
            Err(err) => log::warn!("player name rejected: {err}"),
        }
    })
}

/// Confirmed full reset: wipe durable storage and restart the session.
pub fn build_reset(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        #[cfg(target_arch = "wasm32")]
        {
            use clickstorm_game::ProgressStore;
            let confirmed = crate::dom::window()
                .confirm_with_message(
                    "Are you sure you want to reset the game? All progress will be lost!",
                )
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            log::info!(
                "game reset: final_score={}",
                state.progress.borrow().currency
            );
            if let Err(err) = crate::storage::LocalStore.clear() {
                log::error!("clearing saved progress failed: {err}");
            }
            let _ = crate::dom::window().location().reload();
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            state.progress.borrow_mut().reset();
            state.mark_mutated();
        }
    })
}

/// A keydown outside any text input also counts as a click, so the game is
/// fully playable from the keyboard.
pub fn handle_key_click(state: &AppState) {
    economy::click(&mut state.progress.borrow_mut());
    state.mark_mutated();
}

/// Feed one classified keystroke into the cheat detector.
pub fn handle_keystroke(state: &AppState, stroke: KeyStroke) {
    let matched = state.detector.borrow_mut().observe(stroke);
    if !matched {
        return;
    }
    let newly = state.progress.borrow_mut().unlock_cheat();
    if newly {
        log::info!("cheat sequence entered: hidden skins unlocked");
        persist(&state.progress.borrow());
        state.bump();
    }
}

/// Open the leaderboard modal and kick off a refresh.
pub fn build_open_leaderboard(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        state.show_leaderboard.set(true);
        #[cfg(target_arch = "wasm32")]
        sync_leaderboard(&state);
    })
}

/// Push the current score and refresh the ranked rows. Fire-and-forget; a
/// failure leaves the session in unsynced mode.
#[cfg(target_arch = "wasm32")]
pub fn sync_leaderboard(state: &AppState) {
    let (name, score) = {
        let progress = state.progress.borrow();
        (progress.player_name.clone(), progress.currency.floor())
    };
    let Some(name) = name else {
        log::warn!("leaderboard sync skipped: no player name");
        return;
    };
    let rows = state.leaderboard_rows.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match crate::leaderboard::submit_score(&name, score).await {
            Ok(ranked) => rows.set(ranked),
            Err(err) => log::error!("leaderboard sync failed: {err:#}"),
        }
    });
}

/// Generic open/close toggle for a modal flag.
pub fn build_toggle(handle: &UseStateHandle<bool>, value: bool) -> Callback<()> {
    let handle = handle.clone();
    Callback::from(move |()| handle.set(value))
}
