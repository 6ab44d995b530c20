//! Top-level UI surface selection.
//!
//! Several independent session flags decide which one surface is shown.
//! [`select_surface`] resolves them with a fixed precedence:
//!
//! 1. not authenticated, no room joined: [`UiSurface::RoomPicker`]
//! 2. not authenticated, room joined: [`UiSurface::LoginPrompt`]
//! 3. authenticated, computer open: [`UiSurface::ExclusiveActivity`] (computer)
//! 4. authenticated, whiteboard open: [`UiSurface::ExclusiveActivity`] (whiteboard)
//! 5. otherwise: [`UiSurface::MainSession`]
//!
//! The overlay is a second, independent output: it is shown whenever no
//! exclusive activity is open, whatever the surface.

use crate::session::{Activity, SessionFlags};

/// The single top-level surface on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSurface {
    RoomPicker,
    LoginPrompt,
    ExclusiveActivity(Activity),
    /// Chat is always part of the main session. `video_prompt` asks for the
    /// video-connection prompt on top of it.
    MainSession { video_prompt: bool },
}

/// Output of [`select_surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSelection {
    pub surface: UiSurface,
    /// Whether the always-available control overlay is shown.
    pub overlay: bool,
}

/// Resolves the session flags to exactly one surface plus the overlay flag.
pub fn select_surface(flags: &SessionFlags) -> SurfaceSelection {
    let surface = match (flags.authenticated, flags.exclusive_activity) {
        (false, _) if !flags.room_joined => UiSurface::RoomPicker,
        (false, _) => UiSurface::LoginPrompt,
        (true, Some(Activity::Computer)) => UiSurface::ExclusiveActivity(Activity::Computer),
        (true, Some(Activity::Whiteboard)) => UiSurface::ExclusiveActivity(Activity::Whiteboard),
        (true, None) => UiSurface::MainSession {
            video_prompt: !flags.webcam_connected,
        },
    };

    SurfaceSelection {
        surface,
        overlay: flags.exclusive_activity.is_none(),
    }
}
