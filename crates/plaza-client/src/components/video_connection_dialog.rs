//! Prompt asking the player to connect a webcam.

use plaza_core::SessionAction;
use yew::prelude::*;

use crate::state::SessionContext;

#[function_component(VideoConnectionDialog)]
pub fn video_connection_dialog() -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not found");

    let on_connect = Callback::from(move |_: MouseEvent| {
        session.dispatch(SessionAction::SetWebcamConnected(true));
    });

    html! {
        <div class="video-connection-dialog">
            <p>{ "Connect your webcam to talk with people nearby." }</p>
            <button class="btn btn-primary" onclick={on_connect}>
                { "Connect Webcam" }
            </button>
        </div>
    }
}
