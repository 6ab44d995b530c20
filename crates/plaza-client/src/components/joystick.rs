//! On-screen direction pad for touch devices.

use yew::prelude::*;

const DIRECTIONS: [(&str, &str); 4] = [
    ("up", "▲"),
    ("left", "◀"),
    ("right", "▶"),
    ("down", "▼"),
];

#[function_component(Joystick)]
pub fn joystick() -> Html {
    html! {
        <div class="joystick">
            { for DIRECTIONS.iter().map(|&(direction, label)| {
                let onclick = Callback::from(move |_: MouseEvent| {
                    tracing::debug!(direction, "Joystick input");
                });
                html! {
                    <button class={classes!("joystick-btn", direction)} {onclick}>
                        { label }
                    </button>
                }
            })}
        </div>
    }
}
