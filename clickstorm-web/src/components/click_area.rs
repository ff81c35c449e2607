//! The clickable character image.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClickAreaProps {
    pub img: AttrValue,
    pub name: AttrValue,
    pub on_press: Callback<()>,
    pub on_release: Callback<()>,
}

#[function_component(ClickArea)]
pub fn click_area(props: &ClickAreaProps) -> Html {
    let press = {
        let on_press = props.on_press.clone();
        Callback::from(move |_: MouseEvent| on_press.emit(()))
    };
    // Release fires on mouseup and on mouseleave so the image never sticks
    // in the pressed pose when the pointer drags away.
    let release = {
        let on_release = props.on_release.clone();
        Callback::from(move |_: MouseEvent| on_release.emit(()))
    };
    let leave = {
        let on_release = props.on_release.clone();
        Callback::from(move |_: MouseEvent| on_release.emit(()))
    };

    html! {
        <img
            id="click-target"
            class="click-area"
            src={props.img.clone()}
            alt={props.name.clone()}
            draggable="false"
            onmousedown={press}
            onmouseup={release}
            onmouseleave={leave}
        />
    }
}
