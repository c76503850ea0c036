//! The client reducer: session, latest snapshot, and the auto-join rule.
//!
//! [`Client`] is synchronous and owns no I/O. The driver feeds it frames
//! and intents and sends whatever it hands back, which keeps every rule
//! here testable without a connection.

use ballotbox_protocol::{ClientMessage, Game, ServerFrame, ServerMessage};
use ballotbox_session::Session;
use ballotbox_view::{Rendered, ViewError, needs_join, render};

use crate::{BallotError, Intent, emit};

/// One connected client.
#[derive(Debug, Clone)]
pub struct Client {
    session: Session,
    snapshot: Option<Game>,
    /// Set once `PLAYER_JOIN` has been sent for the current lobby stint.
    join_sent: bool,
}

impl Client {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            snapshot: None,
            join_sent: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The most recent snapshot, if any has arrived.
    pub fn snapshot(&self) -> Option<&Game> {
        self.snapshot.as_ref()
    }

    /// Applies one frame from the engine.
    ///
    /// Returns the messages that must be sent in response. At most that
    /// is a single `PLAYER_JOIN`.
    ///
    /// # Errors
    /// [`BallotError::ServerFault`] for a `fail` frame. The connection is
    /// unusable after that.
    pub fn apply(
        &mut self,
        frame: ServerFrame,
    ) -> Result<Vec<ClientMessage>, BallotError> {
        let msg = match frame {
            ServerFrame::Message(msg) => msg,
            ServerFrame::Fail(reason) => {
                tracing::error!(%reason, "engine reported a fault");
                return Err(BallotError::ServerFault(reason));
            }
        };

        match msg {
            ServerMessage::UpdateGameState { game } => {
                Ok(self.replace_snapshot(game).into_iter().collect())
            }
            ServerMessage::PlayerJoined { player } => {
                tracing::info!(player_id = %player.id, name = %player.name, "player joined");
                Ok(Vec::new())
            }
            ServerMessage::ClockTick => Ok(Vec::new()),
        }
    }

    /// Replaces the snapshot wholesale and runs the auto-join rule.
    fn replace_snapshot(&mut self, game: Game) -> Option<ClientMessage> {
        if let Some((field, id)) = game.dangling_reference() {
            tracing::warn!(field, %id, "snapshot references an unseated player");
        }
        tracing::debug!(
            phase = ?game.phase.name,
            players = game.players.len(),
            "snapshot received"
        );

        let join = self.session.player_id().and_then(|me| {
            if !needs_join(&game, me) {
                self.join_sent = false;
                return None;
            }
            if self.join_sent {
                return None;
            }
            self.join_sent = true;
            tracing::info!(player_id = %me, "joining game");
            Some(ClientMessage::PlayerJoin {
                player_id: me.clone(),
            })
        });

        self.snapshot = Some(game);
        join
    }

    /// Turns a user intent into a message, checked against the current
    /// snapshot. See [`emit`](crate::emit).
    pub fn emit(&self, intent: Intent) -> Option<ClientMessage> {
        emit(intent, &self.session, self.snapshot.as_ref())
    }

    /// Renders the current snapshot for this session.
    ///
    /// # Errors
    /// [`ViewError`] if the snapshot is inconsistent for the active phase.
    pub fn render(&self) -> Result<Rendered, ViewError> {
        render(&self.session, self.snapshot.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballotbox_protocol::{Player, PlayerId};

    fn pid(id: &str) -> PlayerId {
        PlayerId::from(id)
    }

    fn seat(id: &str) -> Player {
        Player {
            id: pid(id),
            name: id.to_string(),
            reveal_role: false,
            seen_role: false,
            role: None,
            vote: None,
        }
    }

    fn lobby(ids: &[&str]) -> ServerFrame {
        ServerFrame::Message(ServerMessage::UpdateGameState {
            game: Game {
                players: ids.iter().map(|id| seat(id)).collect(),
                ..Game::default()
            },
        })
    }

    #[test]
    fn test_apply_replaces_snapshot() {
        let mut client = Client::new(Session::board(false));

        client.apply(lobby(&["a"])).unwrap();
        client.apply(lobby(&["b", "c"])).unwrap();

        let players = &client.snapshot().unwrap().players;
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].id, pid("b"));
    }

    #[test]
    fn test_apply_board_never_joins() {
        let mut client = Client::new(Session::board(false));

        assert!(client.apply(lobby(&[])).unwrap().is_empty());
    }

    #[test]
    fn test_apply_seated_hand_does_not_join() {
        let mut client = Client::new(Session::hand(pid("me"), false));

        assert!(client.apply(lobby(&["me"])).unwrap().is_empty());
    }

    #[test]
    fn test_apply_join_latch_rearms_after_being_seated() {
        let mut client = Client::new(Session::hand(pid("me"), false));

        assert_eq!(client.apply(lobby(&[])).unwrap().len(), 1);
        client.apply(lobby(&["me"])).unwrap();
        // Removed from the lobby (e.g. the engine restarted): join again.
        assert_eq!(client.apply(lobby(&[])).unwrap().len(), 1);
    }

    #[test]
    fn test_apply_fail_frame_is_server_fault() {
        let mut client = Client::new(Session::board(false));

        let result = client.apply(ServerFrame::Fail("nope".into()));
        assert!(matches!(result, Err(BallotError::ServerFault(r)) if r == "nope"));
    }

    #[test]
    fn test_apply_informational_messages_leave_snapshot_alone() {
        let mut client = Client::new(Session::hand(pid("me"), false));
        client.apply(lobby(&["me"])).unwrap();

        let out = client
            .apply(ServerFrame::Message(ServerMessage::PlayerJoined {
                player: seat("x"),
            }))
            .unwrap();
        client
            .apply(ServerFrame::Message(ServerMessage::ClockTick))
            .unwrap();

        assert!(out.is_empty());
        assert_eq!(client.snapshot().unwrap().players.len(), 1);
    }

    #[test]
    fn test_render_before_any_snapshot() {
        let client = Client::new(Session::board(false));
        assert!(client.render().is_ok());
    }
}
