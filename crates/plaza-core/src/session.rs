//! Session flags and the store that owns them.
//!
//! The orchestrator and the surface selector never hold a reference to the
//! store. They only see the [`SessionFlags`] snapshot taken at render time.

use serde::{Deserialize, Serialize};

/// A modal in-room activity that replaces the default session view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    /// Shared computer (screen sharing).
    Computer,
    /// Shared whiteboard.
    Whiteboard,
}

/// Read-only snapshot of the session state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionFlags {
    pub authenticated: bool,
    /// `None` when no exclusive activity is open.
    pub exclusive_activity: Option<Activity>,
    pub webcam_connected: bool,
    pub room_joined: bool,
    pub current_room_id: Option<String>,
}

/// Mutations applied to the session store by collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Transition from pre-join to in-session presentation.
    EnterRoom { room_id: String },
    /// The player finished the login prompt.
    LogIn,
    OpenActivity(Activity),
    CloseActivity,
    SetWebcamConnected(bool),
    /// Drop everything and go back to the room picker.
    LeaveRoom,
}

/// Minimal authoritative store for [`SessionFlags`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionStore {
    flags: SessionFlags,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot consumed by the selector and the URL sync.
    pub fn flags(&self) -> SessionFlags {
        self.flags.clone()
    }

    pub fn apply(&mut self, action: SessionAction) {
        tracing::debug!(?action, "Applying session action");

        match action {
            SessionAction::EnterRoom { room_id } => {
                self.flags.room_joined = true;
                self.flags.current_room_id = Some(room_id);
            }
            SessionAction::LogIn => {
                self.flags.authenticated = true;
            }
            SessionAction::OpenActivity(activity) => {
                self.flags.exclusive_activity = Some(activity);
            }
            SessionAction::CloseActivity => {
                self.flags.exclusive_activity = None;
            }
            SessionAction::SetWebcamConnected(connected) => {
                self.flags.webcam_connected = connected;
            }
            SessionAction::LeaveRoom => {
                self.flags = SessionFlags::default();
            }
        }
    }
}
