//! The two purchase buttons and their price labels.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UpgradePanelProps {
    pub auto_units: u32,
    pub auto_cost: AttrValue,
    pub auto_affordable: bool,
    pub on_buy_auto: Callback<()>,
    pub multiplier: AttrValue,
    pub multiplier_cost: AttrValue,
    pub multiplier_affordable: bool,
    pub on_buy_multiplier: Callback<()>,
}

#[function_component(UpgradePanel)]
pub fn upgrade_panel(props: &UpgradePanelProps) -> Html {
    let buy_auto = {
        let on_buy = props.on_buy_auto.clone();
        Callback::from(move |_: MouseEvent| on_buy.emit(()))
    };
    let buy_multiplier = {
        let on_buy = props.on_buy_multiplier.clone();
        Callback::from(move |_: MouseEvent| on_buy.emit(()))
    };

    html! {
        <section class="upgrades">
            <button
                id="buy-auto"
                disabled={!props.auto_affordable}
                onclick={buy_auto}
            >
                { format!("Auto Clicker ({}): {} clicks", props.auto_units, props.auto_cost) }
            </button>
            <button
                id="buy-multiplier"
                disabled={!props.multiplier_affordable}
                onclick={buy_multiplier}
            >
                { format!("x{} Multiplier: {} clicks", props.multiplier, props.multiplier_cost) }
            </button>
        </section>
    }
}
