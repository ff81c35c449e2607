//! Interval timers: passive income, persistence flush and leaderboard sync.
//!
//! The closures are installed once and leaked with `Closure::forget`; they
//! mutate the shared `Rc<RefCell<..>>` record directly so they never act on
//! a stale snapshot.

use clickstorm_game::{FLUSH_INTERVAL_MS, SYNC_INTERVAL_MS, TICK_INTERVAL_MS, economy};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::app::{handlers, state::AppState};

fn set_interval(closure: &Closure<dyn FnMut()>, interval_ms: i32) {
    if let Err(err) = crate::dom::window().set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms,
    ) {
        log::error!(
            "installing interval timer failed: {}",
            crate::dom::js_error_message(&err)
        );
    }
}

/// Install the three game intervals on first render.
#[hook]
pub fn use_game_timers(state: &AppState) {
    let state = state.clone();
    use_effect_with((), move |()| {
        let tick_state = state.clone();
        let tick = Closure::<dyn FnMut()>::new(move || {
            let units = tick_state.progress.borrow().auto_units;
            if units == 0 {
                return;
            }
            economy::auto_tick(&mut tick_state.progress.borrow_mut());
            tick_state.mark_mutated();
        });
        set_interval(&tick, TICK_INTERVAL_MS);
        tick.forget();

        let flush_state = state.clone();
        let flush = Closure::<dyn FnMut()>::new(move || {
            if !*flush_state.dirty.borrow() {
                return;
            }
            *flush_state.dirty.borrow_mut() = false;
            handlers::persist(&flush_state.progress.borrow());
        });
        set_interval(&flush, FLUSH_INTERVAL_MS);
        flush.forget();

        let sync_state = state.clone();
        let sync = Closure::<dyn FnMut()>::new(move || {
            let eligible = {
                let progress = sync_state.progress.borrow();
                progress.player_name.is_some() && progress.currency > 0.0
            };
            if eligible {
                handlers::sync_leaderboard(&sync_state);
            }
        });
        set_interval(&sync, SYNC_INTERVAL_MS);
        sync.forget();

        || {}
    });
}
