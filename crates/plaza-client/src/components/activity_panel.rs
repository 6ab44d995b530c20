//! Exclusive activity panels (shared computer, shared whiteboard).

use plaza_core::{Activity, SessionAction};
use yew::prelude::*;

use crate::state::SessionContext;

/// Props for the ActivityPanel component.
#[derive(Properties, PartialEq)]
pub struct ActivityPanelProps {
    pub activity: Activity,
}

/// Full-screen panel replacing the session view while an activity is open.
#[function_component(ActivityPanel)]
pub fn activity_panel(props: &ActivityPanelProps) -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not found");

    let on_close = Callback::from(move |_: MouseEvent| {
        session.dispatch(SessionAction::CloseActivity);
    });

    let (class, title) = match props.activity {
        Activity::Computer => ("activity-panel computer", "Shared Computer"),
        Activity::Whiteboard => ("activity-panel whiteboard", "Whiteboard"),
    };

    html! {
        <div class={class}>
            <div class="activity-header">
                <h2>{ title }</h2>
                <button class="modal-close-btn" onclick={on_close} title="Close">
                    { "×" }
                </button>
            </div>
            <div class="activity-body"></div>
        </div>
    }
}
