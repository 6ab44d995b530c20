//! Password challenge dialog for private rooms.

use plaza_core::PasswordChallenge;
use yew::prelude::*;

use super::Modal;

/// Props for the PasswordDialog component.
#[derive(Properties, PartialEq)]
pub struct PasswordDialogProps {
    pub challenge: PasswordChallenge,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(PasswordDialog)]
pub fn password_dialog(props: &PasswordDialogProps) -> Html {
    let challenge = &props.challenge;

    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    let field_classes = classes!(
        "password-input",
        challenge.field_empty_error().then_some("error")
    );

    html! {
        <Modal
            open={challenge.dialog_visible()}
            onclose={props.on_cancel.clone()}
            class="password-dialog"
        >
            <form onsubmit={on_submit}>
                <p class="message-text">{ "This is a private room, please enter password:" }</p>
                <div class="form-group">
                    <label for="room-password">{ "Password" }</label>
                    <input
                        id="room-password"
                        type="password"
                        class={field_classes}
                        value={challenge.password().to_string()}
                        oninput={on_input}
                        autofocus=true
                    />
                    if challenge.field_empty_error() {
                        <span class="helper-text">{ "Required" }</span>
                    }
                </div>
                if challenge.wrong_password_error() {
                    <div class="alert alert-error">{ "Incorrect Password!" }</div>
                }
                <div class="dialog-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        { "Cancel" }
                    </button>
                    <button type="submit" class="btn btn-primary">
                        { "Join" }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
