//! Turning user intents into outbound messages.
//!
//! The engine is authoritative and re-checks everything, so the checks
//! here are only the ones a client can make locally: does this session
//! have a player id, and does the nomination target the right people.
//! A rejected intent produces nothing. It isn't queued or retried.

use ballotbox_protocol::{ClientMessage, Game, PlayerId, Vote};
use ballotbox_session::Session;

/// Something the user asked to do.
///
/// `PLAYER_JOIN` is deliberately missing: joining is never a user action,
/// the [`Client`](crate::Client) sends it on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartGame,
    RevealRole,
    UpdatePlayerName(String),
    SelectChancellorCandidate(PlayerId),
    VoteOnTicket(Vote),
}

impl Intent {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StartGame => "start_game",
            Self::RevealRole => "reveal_role",
            Self::UpdatePlayerName(_) => "update_player_name",
            Self::SelectChancellorCandidate(_) => "select_chancellor_candidate",
            Self::VoteOnTicket(_) => "vote_on_ticket",
        }
    }
}

/// Why an intent was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Boards have no player id, so they can't act for a player.
    #[error("{intent} needs a player id and this session has none")]
    NoPlayerId { intent: &'static str },

    /// A nomination can't be checked before the first snapshot arrives.
    #[error("no snapshot yet")]
    NoSnapshot,

    #[error("cannot nominate yourself")]
    SelfNomination,

    #[error("{0} is the elected president")]
    ElectedPresident(PlayerId),

    #[error("{0} is the elected chancellor")]
    ElectedChancellor(PlayerId),
}

/// Checks whether `intent` may be sent from `session` given the latest
/// snapshot.
///
/// # Errors
/// The [`Rejection`] describing the first failed precondition.
pub fn validate(
    intent: &Intent,
    session: &Session,
    game: Option<&Game>,
) -> Result<(), Rejection> {
    if matches!(intent, Intent::StartGame) {
        return Ok(());
    }

    let Some(me) = session.player_id() else {
        return Err(Rejection::NoPlayerId {
            intent: intent.kind(),
        });
    };

    if let Intent::SelectChancellorCandidate(target) = intent {
        let game = game.ok_or(Rejection::NoSnapshot)?;
        if target == me {
            return Err(Rejection::SelfNomination);
        }
        if game.elected_president.as_ref() == Some(target) {
            return Err(Rejection::ElectedPresident(target.clone()));
        }
        if game.elected_chancellor.as_ref() == Some(target) {
            return Err(Rejection::ElectedChancellor(target.clone()));
        }
    }

    Ok(())
}

/// Builds the message for `intent`, or `None` if it's rejected.
///
/// Rejections are logged at `debug` and otherwise invisible.
pub fn emit(
    intent: Intent,
    session: &Session,
    game: Option<&Game>,
) -> Option<ClientMessage> {
    if let Err(reason) = validate(&intent, session, game) {
        tracing::debug!(intent = intent.kind(), %reason, "intent rejected");
        return None;
    }

    // Every intent past StartGame was validated to have a player id.
    let player_id = session.player_id().cloned();

    let msg = match (intent, player_id) {
        (Intent::StartGame, _) => ClientMessage::StartGame,
        (Intent::RevealRole, Some(player_id)) => {
            ClientMessage::RevealRole { player_id }
        }
        (Intent::UpdatePlayerName(name), Some(player_id)) => {
            ClientMessage::UpdatePlayerName { name, player_id }
        }
        (Intent::SelectChancellorCandidate(player_id), Some(_)) => {
            ClientMessage::SelectChancellorCandidate { player_id }
        }
        (Intent::VoteOnTicket(vote), Some(player_id)) => {
            ClientMessage::VoteOnTicket { player_id, vote }
        }
        (_, None) => return None,
    };

    Some(msg)
}

// =========================================================================
// Tests
// =========================================================================
