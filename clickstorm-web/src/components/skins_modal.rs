//! Skin picker modal, shared by the regular and hidden catalogs.

use yew::prelude::*;

use crate::components::modal::Modal;

/// What pressing a row's button will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinRowAction {
    /// Already unlocked; switch to it.
    Select,
    /// Locked with a price.
    Buy,
    /// Locked reward skin; claiming credits currency.
    Claim,
}

impl SkinRowAction {
    fn label(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Buy => "Buy",
            Self::Claim => "Claim Reward",
        }
    }
}

/// One catalog entry flattened for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinRow {
    pub id: String,
    pub name: String,
    pub img: String,
    pub action: SkinRowAction,
    pub cost_note: Option<String>,
    pub disabled: bool,
    pub selected: bool,
}

#[derive(Properties, PartialEq)]
pub struct SkinsModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub rows: Vec<SkinRow>,
    pub on_select: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(SkinsModal)]
pub fn skins_modal(props: &SkinsModalProps) -> Html {
    let rows = props.rows.iter().map(|row| {
        let onclick = {
            let on_select = props.on_select.clone();
            let id = row.id.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
        };
        let class = classes!("skin-row", row.selected.then_some("selected"));
        html! {
            <li key={row.id.clone()} class={class}>
                <img src={row.img.clone()} alt={row.name.clone()} />
                <span class="skin-name">{ &row.name }</span>
                if let Some(note) = &row.cost_note {
                    <span class="skin-cost">{ note }</span>
                }
                <button disabled={row.disabled} onclick={onclick}>
                    { if row.selected { "Selected" } else { row.action.label() } }
                </button>
            </li>
        }
    });

    html! {
        <Modal open={props.open} title={props.title.clone()} on_close={props.on_close.clone()}>
            <ul class="skin-list">
                { for rows }
            </ul>
        </Modal>
    }
}
