//! Login prompt shown after a room is joined but before the player logs in.

use plaza_core::SessionAction;
use yew::prelude::*;

use crate::state::SessionContext;

#[function_component(LoginDialog)]
pub fn login_dialog() -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let name = use_state(String::new);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !name.trim().is_empty() {
                tracing::info!(name = %name.trim(), "Logging in");
                session.dispatch(SessionAction::LogIn);
            }
        })
    };

    let room_id = session.flags().current_room_id.unwrap_or_default();

    html! {
        <div class="modal-overlay">
            <div class="login-dialog">
                <h2>{ "Joining " }{ room_id }</h2>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name-input">{ "Name" }</label>
                        <input
                            id="name-input"
                            type="text"
                            class="name-input"
                            placeholder="Enter your name"
                            value={(*name).clone()}
                            oninput={on_name_input}
                            maxlength="20"
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary submit-btn"
                        disabled={name.trim().is_empty()}
                    >
                        { "Join" }
                    </button>
                </form>
            </div>
        </div>
    }
}
