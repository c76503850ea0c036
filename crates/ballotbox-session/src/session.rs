//! Session types: what this client is and who is holding it.
//!
//! A session is client-local; the engine never sees it. It records:
//! - WHICH surface this device renders (`ClientRole`)
//! - WHO is holding it, for hands (`PlayerId`)
//! - WHETHER raw state dumps are shown (`debug`)

use std::fmt;

use ballotbox_protocol::PlayerId;
use serde::Serialize;

// ---------------------------------------------------------------------------
// ClientRole
// ---------------------------------------------------------------------------

/// The rendering surface this client drives.
///
/// - **Hand**: one per player. Private actions (voting, viewing one's own
///   role) happen here.
/// - **Board**: a shared display. It only ever shows what every player is
///   entitled to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientRole {
    Hand,
    Board,
}

impl fmt::Display for ClientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hand => f.write_str("hand"),
            Self::Board => f.write_str("board"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One connection's worth of client identity.
///
/// Fields are private and there are no setters: role and player id are
/// fixed for the connection's lifetime. The only way to get a session
/// with a player id is [`Session::hand`], so a board can never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    role: ClientRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    player_id: Option<PlayerId>,
    debug: bool,
}

impl Session {
    /// A hand session held by `player_id`.
    pub fn hand(player_id: PlayerId, debug: bool) -> Self {
        Self {
            role: ClientRole::Hand,
            player_id: Some(player_id),
            debug,
        }
    }

    /// A board session. Boards have no player.
    pub fn board(debug: bool) -> Self {
        Self {
            role: ClientRole::Board,
            player_id: None,
            debug,
        }
    }

    pub fn role(&self) -> ClientRole {
        self.role
    }

    pub fn is_hand(&self) -> bool {
        self.role == ClientRole::Hand
    }

    /// The player holding this hand. Always `None` for boards.
    pub fn player_id(&self) -> Option<&PlayerId> {
        self.player_id.as_ref()
    }

    /// Whether rendered views should include a raw state dump.
    pub fn debug(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_carries_player_id() {
        let session = Session::hand(PlayerId::from("p1"), false);

        assert!(session.is_hand());
        assert_eq!(session.role(), ClientRole::Hand);
        assert_eq!(session.player_id(), Some(&PlayerId::from("p1")));
    }

    #[test]
    fn test_board_has_no_player_id() {
        let session = Session::board(true);

        assert!(!session.is_hand());
        assert_eq!(session.player_id(), None);
        assert!(session.debug());
    }

    #[test]
    fn test_session_serializes_for_debug_dump() {
        let json =
            serde_json::to_value(Session::hand(PlayerId::from("p1"), true))
                .unwrap();

        assert_eq!(json["role"], "hand");
        assert_eq!(json["playerId"], "p1");
        assert_eq!(json["debug"], true);
    }

    #[test]
    fn test_client_role_display() {
        assert_eq!(ClientRole::Hand.to_string(), "hand");
        assert_eq!(ClientRole::Board.to_string(), "board");
    }
}
