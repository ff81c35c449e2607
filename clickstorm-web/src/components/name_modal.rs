//! First-run prompt for the player name. Not dismissable.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct NameModalProps {
    pub open: bool,
    pub draft: AttrValue,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(NameModal)]
pub fn name_modal(props: &NameModalProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };
    let empty = props.draft.trim().is_empty();

    html! {
        <Modal open={props.open} title="What's your name?">
            <form class="name-form" onsubmit={onsubmit}>
                <input
                    id="player-name"
                    type="text"
                    placeholder="Enter your name"
                    value={props.draft.clone()}
                    oninput={oninput}
                />
                <button type="submit" disabled={empty}>{ "Start" }</button>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(draft: &str) -> String {
        let props = NameModalProps {
            open: true,
            draft: draft.to_string().into(),
            on_input: Callback::from(|_: String| ()),
            on_submit: Callback::from(|()| ()),
        };
        block_on(LocalServerRenderer::<NameModal>::with_props(props).render())
    }

    #[test]
    fn prompt_has_no_close_button() {
        let html = render("");
        assert!(html.contains("What's your name?"));
        assert!(!html.contains("modal-close"));
    }

    #[test]
    fn start_is_disabled_until_something_is_typed() {
        assert!(render("   ").contains("disabled"));
        assert!(!render("Benny").contains("disabled"));
    }
}
