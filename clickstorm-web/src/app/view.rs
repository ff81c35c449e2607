//! Page assembly: maps a progression snapshot onto the component tree.

use clickstorm_game::{Progress, Skin, SkinPrice, format_compact, format_grouped, number_to_words};
use yew::prelude::*;

use crate::app::{handlers, state::AppState};
use crate::components::{
    click_area::ClickArea,
    leaderboard_modal::LeaderboardModal,
    name_modal::NameModal,
    skins_modal::{SkinRow, SkinRowAction, SkinsModal},
    upgrade_panel::UpgradePanel,
};

/// Build the row view-model for one catalog entry.
fn skin_row(progress: &Progress, skin: &Skin) -> SkinRow {
    let unlocked = progress.is_unlocked(&skin.id);
    let selected = progress.active_skin == skin.id;
    let (action, cost_note, disabled) = if unlocked {
        (SkinRowAction::Select, None, selected)
    } else {
        match skin.price {
            SkinPrice::Reward { amount } => (
                SkinRowAction::Claim,
                Some(format!("Reward: +{}", format_compact(amount))),
                false,
            ),
            SkinPrice::Purchasable { cost } => (
                SkinRowAction::Buy,
                Some(format!("{} clicks", format_compact(cost))),
                progress.currency < cost,
            ),
        }
    };
    SkinRow {
        id: skin.id.clone(),
        name: skin.name.clone(),
        img: skin.normal_img.clone(),
        action,
        cost_note,
        disabled,
        selected,
    }
}

fn skin_rows<'a>(progress: &Progress, skins: impl Iterator<Item = &'a Skin>) -> Vec<SkinRow> {
    skins.map(|skin| skin_row(progress, skin)).collect()
}

pub fn render_app(state: &AppState) -> Html {
    let progress = state.snapshot();
    let active_skin = state
        .catalog
        .find(&progress.active_skin)
        .unwrap_or_else(|| {
            state
                .catalog
                .find(clickstorm_game::DEFAULT_SKIN_ID)
                .expect("default skin is always in the catalog")
        });
    let skin_img = if *state.pressed {
        active_skin.click_img.clone()
    } else {
        active_skin.normal_img.clone()
    };

    let regular_rows = skin_rows(&progress, state.catalog.regular());
    let sigma_rows = skin_rows(&progress, state.catalog.sigma());

    let on_name_input = {
        let draft = state.name_draft.clone();
        Callback::from(move |value: String| draft.set(value))
    };

    html! {
        <div class="game">
            <header class="counter">
                <h1 id="click-count">{ format_grouped(progress.currency) }</h1>
                <p id="click-words">{ number_to_words(progress.currency) }</p>
            </header>

            <ClickArea
                img={skin_img}
                name={active_skin.name.clone()}
                on_press={handlers::build_press(state)}
                on_release={handlers::build_release(state)}
            />

            <UpgradePanel
                auto_units={progress.auto_units}
                auto_cost={format_compact(progress.auto_unit_cost)}
                auto_affordable={progress.currency >= progress.auto_unit_cost}
                on_buy_auto={handlers::build_buy_auto_unit(state)}
                multiplier={format_compact(progress.multiplier)}
                multiplier_cost={format_compact(progress.multiplier_cost)}
                multiplier_affordable={progress.currency >= progress.multiplier_cost}
                on_buy_multiplier={handlers::build_buy_multiplier(state)}
            />

            <nav class="actions">
                <button onclick={to_click(handlers::build_toggle(&state.show_skins, true))}>
                    { "Skins" }
                </button>
                if progress.cheat_unlocked {
                    <button
                        class="sigma"
                        onclick={to_click(handlers::build_toggle(&state.show_sigma, true))}
                    >
                        { "Sigma Skins" }
                    </button>
                }
                <button onclick={to_click(handlers::build_open_leaderboard(state))}>
                    { "Leaderboard" }
                </button>
                <button class="danger" onclick={to_click(handlers::build_reset(state))}>
                    { "Reset" }
                </button>
            </nav>

            <NameModal
                open={progress.player_name.is_none()}
                draft={(*state.name_draft).clone()}
                on_input={on_name_input}
                on_submit={handlers::build_submit_name(state)}
            />
            <SkinsModal
                open={*state.show_skins}
                title="Skins"
                rows={regular_rows}
                on_select={handlers::build_select_skin(state)}
                on_close={handlers::build_toggle(&state.show_skins, false)}
            />
            <SkinsModal
                open={*state.show_sigma && progress.cheat_unlocked}
                title="Sigma Skins"
                rows={sigma_rows}
                on_select={handlers::build_select_skin(state)}
                on_close={handlers::build_toggle(&state.show_sigma, false)}
            />
            <LeaderboardModal
                open={*state.show_leaderboard}
                rows={(*state.leaderboard_rows).clone()}
                own_name={progress.player_name.clone()}
                on_close={handlers::build_toggle(&state.show_leaderboard, false)}
            />
        </div>
    }
}

/// Adapt a unit callback to a DOM click handler.
fn to_click(callback: Callback<()>) -> Callback<MouseEvent> {
    Callback::from(move |_| callback.emit(()))
}
