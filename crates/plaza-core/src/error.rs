//! Join failure type and its classification.

/// A failed join as reported by the room session backend.
///
/// The backend only gives a human-readable message; [`JoinError::classify`]
/// turns it into a [`JoinFailureKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct JoinError {
    message: String,
}

/// How the orchestrator reacts to a failed join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinFailureKind {
    /// Room is protected and no credential was given.
    PasswordRequired,
    /// Room is protected and the supplied credential was rejected.
    PasswordIncorrect,
    /// Anything else: network, backend, full room...
    Other,
}

impl JoinError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Classifies the failure by looking for `password_marker` in the message.
    ///
    /// The match is a plain, case-sensitive substring test.
    pub fn classify(&self, password_marker: &str, password_supplied: bool) -> JoinFailureKind {
        if !self.message.contains(password_marker) {
            JoinFailureKind::Other
        } else if password_supplied {
            JoinFailureKind::PasswordIncorrect
        } else {
            JoinFailureKind::PasswordRequired
        }
    }
}
