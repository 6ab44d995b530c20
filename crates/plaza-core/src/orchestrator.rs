//! Room-join orchestration.
//!
//! The orchestrator owns the room target and the password challenge. It
//! hands out a [`JoinAttempt`] for every join it wants issued; the caller
//! runs the attempt (see [`drive_join`](crate::drive_join)) and feeds the
//! result back through [`RoomJoinOrchestrator::resolve`].
//!
//! Join calls cannot be cancelled, so every attempt carries a generation.
//! Only the newest outstanding attempt may change state; anything older is
//! reported as [`JoinOutcome::Stale`] and dropped.

use tracing::{debug, error, info, warn};

use crate::challenge::PasswordChallenge;
use crate::config::PlazaConfig;
use crate::error::{JoinError, JoinFailureKind};
use crate::session::{SessionAction, SessionFlags};
use crate::url_sync::{QueryParams, UrlSync};

/// One join call, from issue to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinAttempt {
    generation: u64,
    room_id: String,
    password: Option<String>,
}

impl JoinAttempt {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

/// What a resolved attempt did to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Join succeeded; the caller must run the "enter session" action.
    Entered { room_id: String },
    /// The room wants a password; the dialog is open.
    ChallengeOpened { wrong_password: bool },
    /// Any other failure. Logged, dialog untouched.
    Failed { message: String },
    /// Superseded attempt; nothing changed.
    Stale,
}

impl JoinOutcome {
    /// Session store action the outcome calls for, if any.
    pub fn session_action(&self) -> Option<SessionAction> {
        match self {
            Self::Entered { room_id } => Some(SessionAction::EnterRoom {
                room_id: room_id.clone(),
            }),
            Self::ChallengeOpened { .. } | Self::Failed { .. } | Self::Stale => None,
        }
    }
}

/// Drives room joins and the password challenge loop.
#[derive(Debug, Clone)]
pub struct RoomJoinOrchestrator {
    password_marker: String,
    url_sync: UrlSync,
    room_target: Option<String>,
    challenge: PasswordChallenge,
    generation: u64,
    in_flight: Option<u64>,
    last_failure: Option<String>,
}

impl RoomJoinOrchestrator {
    pub fn new(config: &PlazaConfig) -> Self {
        Self {
            password_marker: config.password_marker.clone(),
            url_sync: UrlSync::new(config.room_param.clone()),
            room_target: None,
            challenge: PasswordChallenge::default(),
            generation: 0,
            in_flight: None,
            last_failure: None,
        }
    }

    pub fn room_target(&self) -> Option<&str> {
        self.room_target.as_deref()
    }

    pub fn challenge(&self) -> &PasswordChallenge {
        &self.challenge
    }

    /// Whether a join call is outstanding.
    pub fn is_joining(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Message of the last non-password failure of a join that carried a
    /// password. First-time failures are only logged.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn dismiss_failure(&mut self) {
        self.last_failure = None;
    }

    /// Startup: deep-link into the room named by the URL, if any.
    pub fn start(&mut self, query: &impl QueryParams) -> Option<JoinAttempt> {
        let room_id = self.url_sync.read_room(query)?;
        info!(%room_id, "Deep-linked room found in URL");
        self.select_room(room_id)
    }

    /// Explicit room choice. Issues a join for any non-empty room.
    ///
    /// Picking the current target again is ignored only while its join is
    /// outstanding or its password dialog is open.
    pub fn select_room(&mut self, room_id: impl Into<String>) -> Option<JoinAttempt> {
        let room_id = room_id.into();
        let room_id = room_id.trim();
        if room_id.is_empty() {
            return None;
        }
        if self.room_target.as_deref() == Some(room_id)
            && (self.in_flight.is_some() || self.challenge.dialog_visible())
        {
            debug!(room_id, "Room already being joined");
            return None;
        }
        self.request_join(room_id, None)
    }

    /// Issues a join for `room_id` and makes it the room target.
    ///
    /// Returns `None` for an empty room id. An empty password is treated as
    /// no password.
    pub fn request_join(
        &mut self,
        room_id: impl Into<String>,
        password: Option<String>,
    ) -> Option<JoinAttempt> {
        let room_id = room_id.into();
        if room_id.is_empty() {
            warn!("Ignoring join request without a room id");
            return None;
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.room_target = Some(room_id.clone());

        Some(JoinAttempt {
            generation: self.generation,
            room_id,
            password: password.filter(|p| !p.is_empty()),
        })
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.challenge.set_password(password);
    }

    /// Password form submission.
    ///
    /// An empty password only toggles the inline field error and keeps the
    /// dialog open. This intentionally departs from resetting the dialog on
    /// every submission: a reset would hide the "Required" error the
    /// submission just raised. A non-empty password closes and resets the
    /// dialog and issues a join for the current room target; a rejection
    /// reopens the dialog from [`resolve`](Self::resolve).
    pub fn submit_password(&mut self) -> Option<JoinAttempt> {
        let password = self.challenge.validate_submission()?;
        self.challenge.reset();

        let Some(room_id) = self.room_target.clone() else {
            warn!("Password submitted without a room target");
            return None;
        };
        self.request_join(room_id, Some(password))
    }

    /// Closes the dialog. The room target is kept.
    pub fn cancel_password_challenge(&mut self) {
        self.challenge.reset();
    }

    /// Applies the result of `attempt`.
    pub fn resolve(&mut self, attempt: &JoinAttempt, result: Result<(), JoinError>) -> JoinOutcome {
        if self.in_flight != Some(attempt.generation)
            || self.room_target.as_deref() != Some(attempt.room_id.as_str())
        {
            warn!(
                room_id = %attempt.room_id,
                generation = attempt.generation,
                latest = self.generation,
                "Ignoring stale join resolution"
            );
            return JoinOutcome::Stale;
        }
        self.in_flight = None;

        let error = match result {
            Ok(()) => {
                info!(room_id = %attempt.room_id, "Joined room");
                self.challenge.reset();
                self.last_failure = None;
                return JoinOutcome::Entered {
                    room_id: attempt.room_id.clone(),
                };
            }
            Err(error) => error,
        };

        let password_supplied = attempt.password.is_some();
        match error.classify(&self.password_marker, password_supplied) {
            JoinFailureKind::PasswordRequired => {
                warn!(room_id = %attempt.room_id, %error, "Room requires a password");
                self.challenge.open(false);
                JoinOutcome::ChallengeOpened {
                    wrong_password: false,
                }
            }
            JoinFailureKind::PasswordIncorrect => {
                warn!(room_id = %attempt.room_id, %error, "Password rejected");
                self.challenge.open(true);
                JoinOutcome::ChallengeOpened {
                    wrong_password: true,
                }
            }
            JoinFailureKind::Other => {
                error!(room_id = %attempt.room_id, %error, "Failed to join room");
                if password_supplied {
                    self.last_failure = Some(error.message().to_string());
                }
                JoinOutcome::Failed {
                    message: error.message().to_string(),
                }
            }
        }
    }

    /// Leaves the current room.
    ///
    /// Forgets the room target, closes the dialog, drops the room from the
    /// URL and makes any outstanding join stale. Returns the store action
    /// that resets the session.
    pub fn leave(&mut self, query: &mut impl QueryParams) -> SessionAction {
        info!(room_id = ?self.room_target, "Leaving room");
        self.room_target = None;
        self.in_flight = None;
        self.challenge.reset();
        self.last_failure = None;
        self.url_sync.forget(query);
        SessionAction::LeaveRoom
    }

    /// Writes the confirmed room of `flags` into the URL when it changed.
    pub fn reflect_room(&mut self, query: &mut impl QueryParams, flags: &SessionFlags) -> bool {
        self.url_sync.reflect(query, flags.current_room_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use futures::executor::block_on;

    use super::*;
    use crate::client::{RoomSessionClient, drive_join};
    use crate::session::SessionStore;
    use crate::surface::{UiSurface, select_surface};
    use crate::url_sync::tests::FakeQuery;

    /// Backend double answering from a script and recording every call.
    #[derive(Default)]
    struct ScriptedClient {
        replies: RefCell<VecDeque<Result<(), JoinError>>>,
        calls: RefCell<Vec<(String, Option<String>)>>,
    }

    impl ScriptedClient {
        fn reply(self, result: Result<(), &str>) -> Self {
            self.replies
                .borrow_mut()
                .push_back(result.map_err(JoinError::new));
            self
        }

        fn calls(&self) -> Vec<(String, Option<String>)> {
            self.calls.borrow().clone()
        }
    }

    impl RoomSessionClient for ScriptedClient {
        async fn join_by_id(&self, room_id: &str, password: Option<&str>) -> Result<(), JoinError> {
            self.calls
                .borrow_mut()
                .push((room_id.to_string(), password.map(str::to_string)));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(JoinError::new("no scripted reply")))
        }
    }

    fn orchestrator() -> RoomJoinOrchestrator {
        RoomJoinOrchestrator::new(&PlazaConfig::default())
    }

    fn run(
        orch: &mut RoomJoinOrchestrator,
        client: &ScriptedClient,
        attempt: Option<JoinAttempt>,
    ) -> JoinOutcome {
        let attempt = attempt.expect("an attempt should have been issued");
        let result = block_on(drive_join(client, &attempt));
        orch.resolve(&attempt, result)
    }

    #[test]
    fn test_deep_link_joins_without_password() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default().reply(Ok(()));

        let attempt = orch.start(&FakeQuery::with("room", "ABC123"));
        let outcome = run(&mut orch, &client, attempt);

        assert_eq!(client.calls(), vec![("ABC123".to_string(), None)]);
        assert_eq!(
            outcome,
            JoinOutcome::Entered {
                room_id: "ABC123".to_string()
            }
        );
        assert!(!orch.is_joining());
    }

    #[test]
    fn test_no_deep_link_no_join() {
        let mut orch = orchestrator();
        assert_eq!(orch.start(&FakeQuery::default()), None);
        assert_eq!(orch.room_target(), None);
    }

    #[test]
    fn test_password_required_opens_dialog_without_banner() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default().reply(Err("Password required"));

        let attempt = orch.select_room("R1");
        let outcome = run(&mut orch, &client, attempt);

        assert_eq!(
            outcome,
            JoinOutcome::ChallengeOpened {
                wrong_password: false
            }
        );
        assert!(orch.challenge().dialog_visible());
        assert!(!orch.challenge().wrong_password_error());
        assert_eq!(orch.room_target(), Some("R1"));
    }

    #[test]
    fn test_password_retry_loop() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default()
            .reply(Err("Password required"))
            .reply(Err("Wrong Password"));

        let attempt = orch.select_room("R1");
        run(&mut orch, &client, attempt);
        assert!(orch.challenge().dialog_visible());

        orch.set_password("secret");
        let attempt = orch.submit_password();
        // Submission resets the dialog before the answer arrives.
        assert_eq!(orch.challenge(), &PasswordChallenge::default());

        let outcome = run(&mut orch, &client, attempt);
        assert_eq!(
            client.calls(),
            vec![
                ("R1".to_string(), None),
                ("R1".to_string(), Some("secret".to_string())),
            ]
        );
        assert_eq!(
            outcome,
            JoinOutcome::ChallengeOpened {
                wrong_password: true
            }
        );
        assert!(orch.challenge().dialog_visible());
        assert!(orch.challenge().wrong_password_error());
        assert!(!orch.challenge().field_empty_error());
    }

    #[test]
    fn test_correct_password_enters_and_clears_challenge() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default()
            .reply(Err("Password required"))
            .reply(Ok(()));

        let attempt = orch.select_room("R1");
        run(&mut orch, &client, attempt);

        orch.set_password("secret");
        let attempt = orch.submit_password();
        let outcome = run(&mut orch, &client, attempt);

        assert_eq!(
            outcome,
            JoinOutcome::Entered {
                room_id: "R1".to_string()
            }
        );
        assert_eq!(orch.challenge(), &PasswordChallenge::default());
    }

    #[test]
    fn test_empty_submission_makes_no_call() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default()
            .reply(Err("Password required"))
            .reply(Ok(()));

        let attempt = orch.select_room("R1");
        run(&mut orch, &client, attempt);

        assert_eq!(orch.submit_password(), None);
        assert!(orch.challenge().field_empty_error());
        assert!(orch.challenge().dialog_visible());
        assert!(!orch.is_joining());

        orch.set_password("secret");
        let attempt = orch.submit_password();
        assert!(!orch.challenge().field_empty_error());
        run(&mut orch, &client, attempt);

        assert_eq!(client.calls().len(), 2);
        assert_eq!(client.calls()[1].1.as_deref(), Some("secret"));
    }

    #[test]
    fn test_cancel_keeps_room_target() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default()
            .reply(Err("Password required"))
            .reply(Err("Password required"));

        let attempt = orch.select_room("R1");
        run(&mut orch, &client, attempt);
        orch.set_password("half-typed");

        orch.cancel_password_challenge();
        assert_eq!(orch.challenge(), &PasswordChallenge::default());
        assert_eq!(orch.room_target(), Some("R1"));

        // With the dialog closed, picking the room again asks afresh.
        let attempt = orch.select_room("R1");
        assert_eq!(attempt.as_ref().and_then(JoinAttempt::password), None);
        run(&mut orch, &client, attempt);
        assert!(orch.challenge().dialog_visible());
        assert_eq!(client.calls().len(), 2);
    }

    #[test]
    fn test_same_room_ignored_while_joining() {
        let mut orch = orchestrator();

        let first = orch.select_room("R1").unwrap();
        assert_eq!(orch.select_room(" R1 "), None);
        assert_eq!(
            orch.resolve(&first, Ok(())),
            JoinOutcome::Entered {
                room_id: "R1".to_string()
            }
        );
    }

    #[test]
    fn test_same_room_ignored_while_challenge_open() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default().reply(Err("Password required"));

        let attempt = orch.select_room("R1");
        run(&mut orch, &client, attempt);
        orch.set_password("half-typed");

        assert_eq!(orch.select_room("R1"), None);
        assert!(orch.challenge().dialog_visible());
        assert_eq!(orch.challenge().password(), "half-typed");
    }

    #[test]
    fn test_same_room_retry_after_other_failure() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default()
            .reply(Err("room is full"))
            .reply(Ok(()));

        let attempt = orch.select_room("R1");
        let outcome = run(&mut orch, &client, attempt);
        assert!(matches!(outcome, JoinOutcome::Failed { .. }));

        let retry = orch.select_room("R1");
        assert!(retry.is_some());
        assert_eq!(
            run(&mut orch, &client, retry),
            JoinOutcome::Entered {
                room_id: "R1".to_string()
            }
        );
        assert_eq!(
            client.calls(),
            vec![("R1".to_string(), None), ("R1".to_string(), None)]
        );
    }

    #[test]
    fn test_entered_outcome_enters_session() {
        let mut orch = orchestrator();
        let mut store = SessionStore::new();
        let client = ScriptedClient::default().reply(Ok(()));

        let attempt = orch.select_room("R1");
        let outcome = run(&mut orch, &client, attempt);
        store.apply(outcome.session_action().unwrap());

        let flags = store.flags();
        assert!(flags.room_joined);
        assert_eq!(flags.current_room_id.as_deref(), Some("R1"));
        assert_eq!(select_surface(&flags).surface, UiSurface::LoginPrompt);
    }

    #[test]
    fn test_only_entered_outcome_touches_session() {
        assert_eq!(JoinOutcome::Stale.session_action(), None);
        assert_eq!(
            JoinOutcome::ChallengeOpened {
                wrong_password: true
            }
            .session_action(),
            None
        );
        assert_eq!(
            JoinOutcome::Failed {
                message: "room is full".to_string()
            }
            .session_action(),
            None
        );
    }

    #[test]
    fn test_rejoin_after_leave() {
        let mut orch = orchestrator();
        let mut store = SessionStore::new();
        let mut query = FakeQuery::with("room", "R1");
        let client = ScriptedClient::default().reply(Ok(())).reply(Ok(()));

        let attempt = orch.start(&query);
        let outcome = run(&mut orch, &client, attempt);
        store.apply(outcome.session_action().unwrap());
        assert!(orch.reflect_room(&mut query, &store.flags()));

        store.apply(orch.leave(&mut query));
        assert_eq!(orch.room_target(), None);
        assert_eq!(query.get("room"), None);
        assert_eq!(select_surface(&store.flags()).surface, UiSurface::RoomPicker);
        assert!(!orch.reflect_room(&mut query, &store.flags()));

        let attempt = orch.select_room("R1");
        assert!(attempt.is_some());
        let outcome = run(&mut orch, &client, attempt);
        store.apply(outcome.session_action().unwrap());

        assert!(orch.reflect_room(&mut query, &store.flags()));
        assert_eq!(query.get("room").as_deref(), Some("R1"));
        assert_eq!(client.calls().len(), 2);
    }

    #[test]
    fn test_leave_makes_outstanding_join_stale() {
        let mut orch = orchestrator();
        let mut query = FakeQuery::default();

        let attempt = orch.select_room("R1").unwrap();
        assert_eq!(orch.leave(&mut query), SessionAction::LeaveRoom);
        assert!(!orch.is_joining());

        assert_eq!(orch.resolve(&attempt, Ok(())), JoinOutcome::Stale);
        assert_eq!(
            orch.resolve(&attempt, Err(JoinError::new("Password required"))),
            JoinOutcome::Stale
        );
        assert!(!orch.challenge().dialog_visible());
    }

    #[test]
    fn test_cancelled_target_still_reflected_on_join() {
        let mut orch = orchestrator();
        let mut query = FakeQuery::default();
        let client = ScriptedClient::default().reply(Err("Password required"));

        let attempt = orch.select_room("R1");
        run(&mut orch, &client, attempt);
        orch.cancel_password_challenge();

        // Joined through another path (e.g. the room picker's own flow).
        let flags = SessionFlags {
            room_joined: true,
            current_room_id: Some("R1".to_string()),
            ..SessionFlags::default()
        };
        assert!(orch.reflect_room(&mut query, &flags));
        assert_eq!(query.params.get("room").map(String::as_str), Some("R1"));
    }

    #[test]
    fn test_stale_failure_after_newer_success_is_ignored() {
        let mut orch = orchestrator();

        let old = orch.select_room("OLD").unwrap();
        let new = orch.select_room("NEW").unwrap();

        assert_eq!(
            orch.resolve(&new, Ok(())),
            JoinOutcome::Entered {
                room_id: "NEW".to_string()
            }
        );
        assert_eq!(
            orch.resolve(&old, Err(JoinError::new("Password required"))),
            JoinOutcome::Stale
        );
        assert!(!orch.challenge().dialog_visible());
        assert_eq!(orch.room_target(), Some("NEW"));
    }

    #[test]
    fn test_double_resolution_is_stale() {
        let mut orch = orchestrator();
        let attempt = orch.select_room("R1").unwrap();

        orch.resolve(&attempt, Ok(()));
        assert_eq!(
            orch.resolve(&attempt, Err(JoinError::new("Password required"))),
            JoinOutcome::Stale
        );
        assert!(!orch.challenge().dialog_visible());
    }

    #[test]
    fn test_other_failure_first_time_only_logged() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default().reply(Err("room is full"));

        let attempt = orch.select_room("R1");
        let outcome = run(&mut orch, &client, attempt);

        assert_eq!(
            outcome,
            JoinOutcome::Failed {
                message: "room is full".to_string()
            }
        );
        assert!(!orch.challenge().dialog_visible());
        assert_eq!(orch.last_failure(), None);
    }

    #[test]
    fn test_other_failure_after_password_is_surfaced() {
        let mut orch = orchestrator();
        let client = ScriptedClient::default()
            .reply(Err("Password required"))
            .reply(Err("connection reset"));

        let attempt = orch.select_room("R1");
        run(&mut orch, &client, attempt);
        orch.set_password("secret");
        let attempt = orch.submit_password();
        run(&mut orch, &client, attempt);

        assert!(!orch.challenge().dialog_visible());
        assert_eq!(orch.last_failure(), Some("connection reset"));

        orch.dismiss_failure();
        assert_eq!(orch.last_failure(), None);
    }

    #[test]
    fn test_empty_room_id_is_rejected() {
        let mut orch = orchestrator();
        assert_eq!(orch.select_room("   "), None);
        assert_eq!(orch.request_join("", None), None);
        assert!(!orch.is_joining());
    }

    #[test]
    fn test_custom_marker() {
        let config = PlazaConfig {
            password_marker: "locked".to_string(),
            ..PlazaConfig::default()
        };
        let mut orch = RoomJoinOrchestrator::new(&config);
        let attempt = orch.select_room("R1").unwrap();

        let outcome = orch.resolve(&attempt, Err(JoinError::new("room is locked")));
        assert_eq!(
            outcome,
            JoinOutcome::ChallengeOpened {
                wrong_password: false
            }
        );
    }
}
