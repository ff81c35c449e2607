//! Shared modal chrome: backdrop, title bar and optional close button.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    /// Omitted for modals the player must complete rather than dismiss.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = props.on_close.clone().map(|on_close| {
        let onclick = Callback::from(move |_: MouseEvent| on_close.emit(()));
        html! {
            <button class="modal-close" aria-label="Close" onclick={onclick}>
                { "\u{00d7}" }
            </button>
        }
    });

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-label={props.title.clone()}>
                <header class="modal-header">
                    <h2>{ props.title.clone() }</h2>
                    { close }
                </header>
                <div class="modal-body">
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}
