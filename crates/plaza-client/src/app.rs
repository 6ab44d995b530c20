//! Main application component.

use plaza_core::{SurfaceSelection, UiSurface, select_surface};
use yew::prelude::*;

use crate::components::{
    ActivityPanel, ChatPanel, FailureBanner, HelperButtons, Joystick, LoginDialog,
    PasswordDialog, RoomPicker, VideoConnectionDialog,
};
use crate::hooks::{RoomJoinHandle, use_config, use_room_join};
use crate::state::{SessionContext, SessionState};

fn render_surface(selection: SurfaceSelection, join: &RoomJoinHandle) -> Html {
    match selection.surface {
        UiSurface::RoomPicker => {
            let joining = join.is_joining();
            let join = join.clone();
            let on_select = Callback::from(move |room_id: String| join.select_room(room_id));
            html! { <RoomPicker {on_select} {joining} /> }
        }
        UiSurface::LoginPrompt => html! { <LoginDialog /> },
        UiSurface::ExclusiveActivity(activity) => html! { <ActivityPanel {activity} /> },
        UiSurface::MainSession { video_prompt } => html! {
            <>
                <ChatPanel />
                if video_prompt {
                    <VideoConnectionDialog />
                }
                <Joystick />
            </>
        },
    }
}

/// Picks the surface from the session snapshot and hosts the password dialog.
#[function_component(Plaza)]
fn plaza() -> Html {
    let config = use_config();
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let join = use_room_join(&config);

    let selection = select_surface(&session.flags());

    use_effect_with(selection, |selection| {
        tracing::info!(?selection, "Surface selected");
        || ()
    });

    let on_password_input = {
        let join = join.clone();
        Callback::from(move |password: String| join.set_password(password))
    };
    let on_password_submit = {
        let join = join.clone();
        Callback::from(move |()| join.submit_password())
    };
    let on_password_cancel = {
        let join = join.clone();
        Callback::from(move |()| join.cancel_password_challenge())
    };
    let on_dismiss_failure = {
        let join = join.clone();
        Callback::from(move |()| join.dismiss_failure())
    };
    let on_leave = {
        let join = join.clone();
        Callback::from(move |()| join.leave())
    };

    html! {
        <div class="backdrop">
            <PasswordDialog
                challenge={join.challenge()}
                on_input={on_password_input}
                on_submit={on_password_submit}
                on_cancel={on_password_cancel}
            />
            if let Some(message) = join.last_failure() {
                <FailureBanner message={message} on_dismiss={on_dismiss_failure} />
            }
            { render_surface(selection, &join) }
            if selection.overlay {
                <HelperButtons {on_leave} />
            }
        </div>
    }
}

/// Root application component.
#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionContext> context={session}>
            <Plaza />
        </ContextProvider<SessionContext>>
    }
}
