//! Room picker shown before any room is joined.

use yew::prelude::*;

/// Props for the RoomPicker component.
#[derive(Properties, PartialEq)]
pub struct RoomPickerProps {
    /// Explicit room selection.
    pub on_select: Callback<String>,
    /// Whether a join call is outstanding.
    #[prop_or(false)]
    pub joining: bool,
}

#[function_component(RoomPicker)]
pub fn room_picker(props: &RoomPickerProps) -> Html {
    let room_id = use_state(String::new);

    let on_input = {
        let room_id = room_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            room_id.set(input.value());
        })
    };

    let on_submit = {
        let room_id = room_id.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = room_id.trim();
            if !trimmed.is_empty() {
                on_select.emit(trimmed.to_string());
            }
        })
    };

    html! {
        <div class="room-picker">
            <h1>{ "Plaza" }</h1>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="room-id-input">{ "Room ID" }</label>
                    <input
                        id="room-id-input"
                        type="text"
                        class="room-id-input"
                        placeholder="Enter a room ID"
                        value={(*room_id).clone()}
                        oninput={on_input}
                    />
                </div>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={room_id.trim().is_empty() || props.joining}
                >
                    { if props.joining { "Joining..." } else { "Join" } }
                </button>
            </form>
        </div>
    }
}
