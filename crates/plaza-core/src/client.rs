//! Room session backend seam.

use crate::error::JoinError;
use crate::orchestrator::JoinAttempt;

/// Backend that admits the local session into a room.
///
/// Futures are not required to be `Send`; the client runs on the browser's
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait RoomSessionClient {
    /// Joins `room_id`, optionally answering a password challenge.
    async fn join_by_id(&self, room_id: &str, password: Option<&str>) -> Result<(), JoinError>;
}

/// Runs one join attempt against `client`.
///
/// The result must be handed back to
/// [`RoomJoinOrchestrator::resolve`](crate::RoomJoinOrchestrator::resolve)
/// together with the same attempt.
pub async fn drive_join<C>(client: &C, attempt: &JoinAttempt) -> Result<(), JoinError>
where
    C: RoomSessionClient + ?Sized,
{
    tracing::info!(
        room_id = %attempt.room_id(),
        generation = attempt.generation(),
        with_password = attempt.password().is_some(),
        "Entering room"
    );
    client
        .join_by_id(attempt.room_id(), attempt.password())
        .await
}
