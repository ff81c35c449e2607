//! Root application component and its supporting hooks.

pub mod handlers;
#[cfg(target_arch = "wasm32")]
pub mod keyboard;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod timers;
pub mod view;

use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let state = state::use_app_state();

    #[cfg(target_arch = "wasm32")]
    {
        timers::use_game_timers(&state);
        keyboard::use_cheat_listener(&state);
    }

    view::render_app(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn fresh_session_renders_counter_and_name_prompt() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("id=\"click-count\""));
        assert!(html.contains(">0<"));
        assert!(html.contains("Zero"));
        // No saved name yet, so the name prompt is open.
        assert!(html.contains("What's your name?"));
    }

    #[test]
    fn sigma_entry_is_hidden_until_the_cheat_unlocks() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(!html.contains("Sigma Skins"));
        assert!(html.contains("Leaderboard"));
        assert!(html.contains("Reset"));
    }
}
