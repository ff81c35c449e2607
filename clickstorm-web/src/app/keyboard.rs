//! Document-level keyboard listener: keys click for the player and feed the
//! cheat detector.

use clickstorm_game::KeyStroke;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::app::{handlers, state::AppState};

/// Listen for keydown on the whole document so the secret can be typed
/// anywhere outside a text field.
#[hook]
pub fn use_cheat_listener(state: &AppState) {
    let state = state.clone();
    use_effect_with((), move |()| {
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            // Typing into the name field must not advance the sequence or
            // award clicks.
            let stroke = if crate::dom::text_input_focused() {
                KeyStroke::Other
            } else {
                handlers::handle_key_click(&state);
                KeyStroke::classify(
                    &event.key(),
                    event.ctrl_key(),
                    event.alt_key(),
                    event.meta_key(),
                )
            };
            handlers::handle_keystroke(&state, stroke);
        });
        if let Err(err) = crate::dom::document()
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            log::error!(
                "installing keydown listener failed: {}",
                crate::dom::js_error_message(&err)
            );
        }
        listener.forget();
        || {}
    });
}
