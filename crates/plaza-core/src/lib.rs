//! Plaza-Live Core Library
//!
//! Client-side session orchestration for the plaza virtual space:
//! - deciding which single top-level surface is on screen ([`select_surface`])
//! - driving the room-join handshake, including the password challenge loop
//!   ([`RoomJoinOrchestrator`])
//! - keeping the `room` query parameter in step with the joined room ([`UrlSync`])
//!
//! Nothing here touches the browser. The front end feeds in a
//! [`SessionFlags`] snapshot and a [`QueryParams`] adapter, and runs the
//! asynchronous join through a [`RoomSessionClient`].

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod challenge;
pub mod client;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod session;
pub mod surface;
pub mod url_sync;

pub use challenge::PasswordChallenge;
pub use client::{RoomSessionClient, drive_join};
pub use config::{ConfigError, PlazaConfig};
pub use error::{JoinError, JoinFailureKind};
pub use orchestrator::{JoinAttempt, JoinOutcome, RoomJoinOrchestrator};
pub use session::{Activity, SessionAction, SessionFlags, SessionStore};
pub use surface::{SurfaceSelection, UiSurface, select_surface};
pub use url_sync::{QueryParams, UrlSync};
