//! Messages exchanged with the game engine, and the frames carrying them.
//!
//! The engine's event stream multiplexes named events. Two matter here:
//! `message` (a typed game message) and `fail` (a fatal, human-readable
//! error). Frames model that outer layer; messages model the inner one.
//!
//! ```text
//! { "event": "message", "data": { "type": "REVEAL_ROLE", "body": { "playerId": "p1" } } }
//! { "event": "fail",    "data": "game is full" }
//! ```

use serde::{Deserialize, Serialize};

use crate::{Game, Player, PlayerId, Vote};

// ---------------------------------------------------------------------------
// ClientMessage: client → engine
// ---------------------------------------------------------------------------

/// Messages a client sends to the engine.
///
/// `#[serde(tag = "type", content = "body")]` produces "adjacently tagged"
/// JSON. Unit variants carry no `body` at all:
///   `{ "type": "START_GAME" }`
///
/// Body fields are `camelCase` on the wire, so each struct variant
/// renames its own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    /// Ask the engine to deal roles and start the first round.
    StartGame,

    /// Flip this player's `revealRole` flag.
    #[serde(rename_all = "camelCase")]
    RevealRole { player_id: PlayerId },

    /// Change this player's display name.
    #[serde(rename_all = "camelCase")]
    UpdatePlayerName { name: String, player_id: PlayerId },

    /// Take a seat. Sent automatically by hands, never by a user action.
    #[serde(rename_all = "camelCase")]
    PlayerJoin { player_id: PlayerId },

    /// The presidential candidate nominates a chancellor. `player_id` is
    /// the nominee, not the sender.
    #[serde(rename_all = "camelCase")]
    SelectChancellorCandidate { player_id: PlayerId },

    /// Cast a ballot on the current ticket.
    #[serde(rename_all = "camelCase")]
    VoteOnTicket { player_id: PlayerId, vote: Vote },
}

impl ClientMessage {
    /// The wire `type` tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StartGame => "START_GAME",
            Self::RevealRole { .. } => "REVEAL_ROLE",
            Self::UpdatePlayerName { .. } => "UPDATE_PLAYER_NAME",
            Self::PlayerJoin { .. } => "PLAYER_JOIN",
            Self::SelectChancellorCandidate { .. } => {
                "SELECT_CHANCELLOR_CANDIDATE"
            }
            Self::VoteOnTicket { .. } => "VOTE_ON_TICKET",
        }
    }
}

// ---------------------------------------------------------------------------
// ServerMessage: engine → client
// ---------------------------------------------------------------------------

/// Messages the engine pushes to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    /// A full snapshot. Replaces whatever the client held before.
    UpdateGameState { game: Game },

    /// Someone took a seat. Informational; the next snapshot carries the
    /// authoritative player list.
    PlayerJoined { player: Player },

    /// Engine heartbeat. Carries nothing.
    ClockTick,
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

/// An inbound event from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerFrame {
    /// A game message.
    Message(ServerMessage),

    /// The engine gave up on this connection. The reason is for humans;
    /// the client treats every `fail` as fatal.
    Fail(String),
}

/// An outbound event to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ClientFrame {
    Message(ClientMessage),
}

// =========================================================================
// Tests
// =========================================================================
