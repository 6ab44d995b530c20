//! Hook driving the room-join orchestrator on the Yew event loop.

use std::cell::RefCell;
use std::rc::Rc;

use plaza_core::{JoinAttempt, PasswordChallenge, PlazaConfig, RoomJoinOrchestrator, drive_join};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_room_service;
use crate::network::RoomClient;
use crate::state::SessionContext;
use crate::util::BrowserQuery;

/// Handle for room joins and the password challenge.
///
/// Every mutation forces a re-render of the component that owns the hook.
#[derive(Clone)]
pub struct RoomJoinHandle {
    inner: Rc<RefCell<RoomJoinOrchestrator>>,
    client: Rc<RoomClient>,
    session: SessionContext,
    rerender: UseForceUpdateHandle,
}

impl PartialEq for RoomJoinHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl RoomJoinHandle {
    pub fn challenge(&self) -> PasswordChallenge {
        self.inner.borrow().challenge().clone()
    }

    pub fn is_joining(&self) -> bool {
        self.inner.borrow().is_joining()
    }

    pub fn last_failure(&self) -> Option<String> {
        self.inner.borrow().last_failure().map(str::to_string)
    }

    pub fn select_room(&self, room_id: String) {
        let attempt = self.inner.borrow_mut().select_room(room_id);
        self.issue(attempt);
    }

    pub fn set_password(&self, password: String) {
        self.inner.borrow_mut().set_password(password);
        self.rerender.force_update();
    }

    pub fn submit_password(&self) {
        let attempt = self.inner.borrow_mut().submit_password();
        self.issue(attempt);
    }

    pub fn cancel_password_challenge(&self) {
        self.inner.borrow_mut().cancel_password_challenge();
        self.rerender.force_update();
    }

    pub fn dismiss_failure(&self) {
        self.inner.borrow_mut().dismiss_failure();
        self.rerender.force_update();
    }

    /// Leaves the room and drops it from the URL.
    pub fn leave(&self) {
        let action = self.inner.borrow_mut().leave(&mut BrowserQuery);
        self.session.dispatch(action);
        self.rerender.force_update();
    }

    /// Spawns the join call for `attempt`, if one was issued.
    ///
    /// The call is never aborted; the orchestrator drops its resolution when
    /// a newer attempt has been issued meanwhile.
    fn issue(&self, attempt: Option<JoinAttempt>) {
        self.rerender.force_update();
        let Some(attempt) = attempt else {
            return;
        };

        let inner = self.inner.clone();
        let client = self.client.clone();
        let session = self.session.clone();
        let rerender = self.rerender.clone();

        spawn_local(async move {
            let result = drive_join(client.as_ref(), &attempt).await;
            let outcome = inner.borrow_mut().resolve(&attempt, result);

            if let Some(action) = outcome.session_action() {
                session.dispatch(action);
            }
            rerender.force_update();
        });
    }
}

/// Hook owning the orchestrator.
///
/// On mount it deep-links into the room named by the URL. Whenever the
/// session's confirmed room changes it writes that room back into the URL.
#[hook]
pub fn use_room_join(config: &PlazaConfig) -> RoomJoinHandle {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let client = use_room_service(&config.rpc_path);
    let inner = {
        let config = config.clone();
        use_mut_ref(move || RoomJoinOrchestrator::new(&config))
    };
    let rerender = use_force_update();

    let handle = RoomJoinHandle {
        inner: inner.clone(),
        client,
        session: session.clone(),
        rerender,
    };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let attempt = handle.inner.borrow_mut().start(&BrowserQuery);
            handle.issue(attempt);
            || ()
        });
    }

    {
        let flags = session.flags();
        use_effect_with(flags.current_room_id.clone(), move |_| {
            inner.borrow_mut().reflect_room(&mut BrowserQuery, &flags);
            || ()
        });
    }

    handle
}
