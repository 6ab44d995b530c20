//! Always-available control overlay.

use plaza_core::{Activity, SessionAction};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::state::SessionContext;

/// Copies the current page URL, which carries the `room` parameter once a
/// room is joined.
#[function_component(ShareButton)]
fn share_button() -> Html {
    let copy_feedback = use_state(|| false);

    let on_click = {
        let copy_feedback = copy_feedback.clone();
        Callback::from(move |_| {
            let copy_feedback = copy_feedback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let full_url = window.location().href().unwrap_or_default();

                let clipboard = window.navigator().clipboard();
                if let Err(e) = JsFuture::from(clipboard.write_text(&full_url)).await {
                    tracing::warn!("Clipboard write failed: {:?}", e);
                    return;
                }
                copy_feedback.set(true);
                // Reset feedback after 2 seconds
                gloo::timers::callback::Timeout::new(2000, move || {
                    copy_feedback.set(false);
                })
                .forget();
            });
        })
    };

    html! {
        <button
            class={classes!("share-btn", (*copy_feedback).then_some("copied"))}
            onclick={on_click}
            title="Copy room link"
        >
            { if *copy_feedback { "Copied!" } else { "Share" } }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct HelperButtonsProps {
    pub on_leave: Callback<()>,
}

/// Button group layered over every surface except exclusive activities.
#[function_component(HelperButtons)]
pub fn helper_buttons(props: &HelperButtonsProps) -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let flags = session.flags();

    let open_activity = |activity: Activity| {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::OpenActivity(activity));
        })
    };

    let on_leave = props.on_leave.reform(|_: MouseEvent| ());

    html! {
        <div class="helper-buttons">
            <ShareButton />
            if flags.authenticated {
                <button class="btn" onclick={open_activity(Activity::Computer)}>
                    { "Computer" }
                </button>
                <button class="btn" onclick={open_activity(Activity::Whiteboard)}>
                    { "Whiteboard" }
                </button>
            }
            if flags.room_joined {
                <button class="btn btn-secondary" onclick={on_leave}>
                    { "Leave" }
                </button>
            }
        </div>
    }
}
