//! Application state management.

use std::rc::Rc;

use plaza_core::{SessionAction, SessionFlags, SessionStore};
use yew::prelude::*;

/// Session store exposed to components as a reducer context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    store: SessionStore,
}

impl SessionState {
    /// Read-only snapshot handed to the surface selector and URL sync.
    pub fn flags(&self) -> SessionFlags {
        self.store.flags()
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new_state = (*self).clone();
        new_state.store.apply(action);
        if new_state == *self {
            return self;
        }
        Rc::new(new_state)
    }
}

/// Context type for the session state.
pub type SessionContext = UseReducerHandle<SessionState>;
