//! ChatPanel component shown in the main session view.

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Maximum number of messages kept on screen.
const MAX_MESSAGES: usize = 50;

/// Chat panel. Messages are kept locally; relaying them is the session
/// transport's job.
#[function_component(ChatPanel)]
pub fn chat_panel() -> Html {
    let input_ref = use_node_ref();
    let input_value = use_state(String::new);
    let messages = use_state(Vec::<String>::new);

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input_value.set(input.value());
            }
        })
    };

    let on_submit = {
        let input_value = input_value.clone();
        let messages = messages.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let content = input_value.trim().to_string();
            if content.is_empty() {
                return;
            }

            let mut next = (*messages).clone();
            next.push(content);
            if next.len() > MAX_MESSAGES {
                next.remove(0);
            }
            messages.set(next);
            input_value.set(String::new());
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    html! {
        <div class="chat-panel">
            <div class="chat-panel-messages">
                { for messages.iter().enumerate().map(|(i, msg)| html! {
                    <div class="chat-message self" key={i}>
                        <span class="chat-content">{ msg.clone() }</span>
                    </div>
                })}
            </div>
            <form class="chat-panel-input" onsubmit={on_submit}>
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="Type a message..."
                    oninput={on_input}
                />
                <button type="submit" class="send-btn">{ "Send" }</button>
            </form>
        </div>
    }
}
