//! Game snapshot types.
//!
//! Everything in this module is produced by the external game engine and
//! consumed read-only by the client. A [`Game`] is a complete point-in-time
//! view: a new one replaces the previous one wholesale, it is never merged.
//!
//! Field names follow the engine's JSON (`camelCase`), and "unset" values
//! (no role yet, no vote yet) are absent keys rather than `null`, which is
//! why optional fields skip serialization when `None`.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A player's stable identifier, unique within a game.
///
/// The engine uses opaque strings (a hand picks its own id and persists it
/// across reconnects), so unlike a numeric handle this wraps a `String`.
/// `#[serde(transparent)]` keeps it a plain JSON string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A player's secret party affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Fascist,
    Liberal,
}

/// A ballot cast on the current ticket.
///
/// There is no "abstain" variant: a vote is either cast or absent, so the
/// type itself guarantees that anything sent is `ja` or `nein`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Ja,
    Nein,
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ja => f.write_str("ja"),
            Self::Nein => f.write_str("nein"),
        }
    }
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,

    /// Display name; players edit it freely before the game starts.
    pub name: String,

    /// Has this player asked to see their role this round?
    #[serde(default)]
    pub reveal_role: bool,

    /// Has this player ever looked at their role? Only the board's public
    /// roster reads this.
    #[serde(default)]
    pub seen_role: bool,

    /// `None` until the engine deals roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// `None` until the player votes on the current ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<Vote>,
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Which party a policy card enacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Fascist,
    Liberal,
}

/// Where a policy card currently sits.
///
/// Within a legislative cycle a card only moves forward:
///
/// ```text
/// Deck → President → Chancellor → Enacted | Discard
/// ```
///
/// The engine drives every move; the client never changes a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyLocation {
    Deck,
    President,
    Chancellor,
    Enacted,
    Discard,
}

/// A policy card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PolicyKind,
    pub location: PolicyLocation,
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The round phase declared by the engine.
///
/// This is a closed set on purpose: a phase name the client doesn't know
/// fails to decode instead of silently rendering as something else, and
/// every `match` over it must handle all variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    ViewRoles,
    SelectChancellorCandidate,
    ElectionStart,
    VoteOnTicket,
    RevealTicketResults,
    TicketFail,
    LegislativeSessionStart,
    ExecutionActionPhase,
}

impl Phase {
    /// Every phase, in the order a round normally walks through them.
    pub const ALL: [Phase; 8] = [
        Self::ViewRoles,
        Self::SelectChancellorCandidate,
        Self::ElectionStart,
        Self::VoteOnTicket,
        Self::RevealTicketResults,
        Self::TicketFail,
        Self::LegislativeSessionStart,
        Self::ExecutionActionPhase,
    ];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ViewRoles => "VIEW_ROLES",
            Self::SelectChancellorCandidate => "SELECT_CHANCELLOR_CANDIDATE",
            Self::ElectionStart => "ELECTION_START",
            Self::VoteOnTicket => "VOTE_ON_TICKET",
            Self::RevealTicketResults => "REVEAL_TICKET_RESULTS",
            Self::TicketFail => "TICKET_FAIL",
            Self::LegislativeSessionStart => "LEGISLATIVE_SESSION_START",
            Self::ExecutionActionPhase => "EXECUTION_ACTION_PHASE",
        };
        f.write_str(name)
    }
}

/// The current phase and when the engine entered it.
///
/// `name` is absent before the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseStamp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Phase>,

    /// Milliseconds since the epoch, as stamped by the engine.
    #[serde(default)]
    pub timestamp: u64,
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// A complete, immutable snapshot of the game.
///
/// Every id field (`hitler`, the candidates, the elected pair) should
/// resolve to a player in the same snapshot; see
/// [`Game::dangling_reference`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default)]
    pub is_started: bool,

    #[serde(default)]
    pub is_voting: bool,

    /// Seating order. Candidate rotation follows this order.
    #[serde(default)]
    pub players: Vec<Player>,

    #[serde(default)]
    pub policies: Vec<Policy>,

    /// Secret id of the Hitler player, present once roles are dealt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hitler: Option<PlayerId>,

    #[serde(default)]
    pub phase: PhaseStamp,

    /// Older engines send `presidentCandidate`; both spellings are read.
    #[serde(
        default,
        alias = "presidentCandidate",
        skip_serializing_if = "Option::is_none"
    )]
    pub presidential_candidate: Option<PlayerId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chancellor_candidate: Option<PlayerId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elected_president: Option<PlayerId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elected_chancellor: Option<PlayerId>,
}

impl Game {
    /// Looks up a player by id.
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Returns `true` if `id` is seated in this snapshot.
    pub fn has_player(&self, id: &PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// Returns the first id field that names a player missing from
    /// `players`, as `(field, id)`. `None` means the snapshot is
    /// self-consistent.
    pub fn dangling_reference(&self) -> Option<(&'static str, &PlayerId)> {
        let refs = [
            ("hitler", &self.hitler),
            ("presidentialCandidate", &self.presidential_candidate),
            ("chancellorCandidate", &self.chancellor_candidate),
            ("electedPresident", &self.elected_president),
            ("electedChancellor", &self.elected_chancellor),
        ];
        refs.into_iter().find_map(|(field, id)| {
            id.as_ref()
                .filter(|id| !self.has_player(id))
                .map(|id| (field, id))
        })
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The engine defines the exact JSON shapes. These tests pin our serde
    //! attributes to them.

    use super::*;

    fn player(id: &str) -> Player {
        Player {
            id: PlayerId::from(id),
            name: id.to_uppercase(),
            reveal_role: false,
            seen_role: false,
            role: None,
            vote: None,
        }
    }

    #[test]
    fn test_player_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PlayerId::from("0.123")).unwrap();
        assert_eq!(json, "\"0.123\"");
    }

    #[test]
    fn test_player_id_display_is_raw_id() {
        assert_eq!(PlayerId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_player_unset_role_and_vote_are_absent_keys() {
        let json = serde_json::to_value(player("a")).unwrap();

        assert_eq!(json["revealRole"], false);
        assert_eq!(json["seenRole"], false);
        assert!(json.get("role").is_none());
        assert!(json.get("vote").is_none());
    }

    #[test]
    fn test_player_role_and_vote_are_lowercase() {
        let p = Player {
            role: Some(Role::Fascist),
            vote: Some(Vote::Nein),
            ..player("a")
        };
        let json = serde_json::to_value(p).unwrap();

        assert_eq!(json["role"], "fascist");
        assert_eq!(json["vote"], "nein");
    }

    #[test]
    fn test_phase_serializes_screaming_snake_case() {
        let json =
            serde_json::to_string(&Phase::LegislativeSessionStart).unwrap();
        assert_eq!(json, "\"LEGISLATIVE_SESSION_START\"");
    }

    #[test]
    fn test_phase_display_matches_wire_name() {
        for phase in Phase::ALL {
            let wire = serde_json::to_string(&phase).unwrap();
            assert_eq!(wire, format!("\"{phase}\""));
        }
    }

    #[test]
    fn test_phase_unknown_name_fails_to_decode() {
        let result: Result<Phase, _> = serde_json::from_str("\"NAP_TIME\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_policy_kind_uses_type_key() {
        let policy = Policy {
            id: "p1".into(),
            kind: PolicyKind::Liberal,
            location: PolicyLocation::Deck,
        };
        let json = serde_json::to_value(policy).unwrap();

        assert_eq!(json["type"], "liberal");
        assert_eq!(json["location"], "deck");
    }

    #[test]
    fn test_game_decodes_engine_snapshot() {
        let json = r#"{
            "isStarted": true,
            "isVoting": false,
            "players": [
                {"id": "a", "name": "Ann", "revealRole": true, "seenRole": true, "role": "liberal"},
                {"id": "b", "name": "Ben", "revealRole": false, "seenRole": false, "vote": "ja"}
            ],
            "policies": [{"id": "x", "type": "fascist", "location": "enacted"}],
            "hitler": "b",
            "phase": {"name": "ELECTION_START", "timestamp": 1500000000000},
            "presidentialCandidate": "a"
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();

        assert!(game.is_started);
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.players[0].role, Some(Role::Liberal));
        assert_eq!(game.players[1].vote, Some(Vote::Ja));
        assert_eq!(game.policies[0].location, PolicyLocation::Enacted);
        assert_eq!(game.hitler, Some(PlayerId::from("b")));
        assert_eq!(game.phase.name, Some(Phase::ElectionStart));
        assert_eq!(game.presidential_candidate, Some(PlayerId::from("a")));
        assert_eq!(game.elected_president, None);
    }

    #[test]
    fn test_game_accepts_president_candidate_alias() {
        let json = r#"{"players": [], "presidentCandidate": "z"}"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.presidential_candidate, Some(PlayerId::from("z")));
    }

    #[test]
    fn test_game_pre_start_has_no_phase_name() {
        let json = r#"{"isStarted": false, "players": [], "phase": {"timestamp": 0}}"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.phase.name, None);
    }

    #[test]
    fn test_game_player_lookup() {
        let game = Game {
            players: vec![player("a"), player("b")],
            ..Game::default()
        };

        assert_eq!(game.player(&PlayerId::from("b")).unwrap().name, "B");
        assert!(game.player(&PlayerId::from("c")).is_none());
    }

    #[test]
    fn test_dangling_reference_reports_first_unresolved_field() {
        let game = Game {
            players: vec![player("a")],
            hitler: Some(PlayerId::from("a")),
            elected_chancellor: Some(PlayerId::from("ghost")),
            ..Game::default()
        };

        assert_eq!(
            game.dangling_reference(),
            Some(("electedChancellor", &PlayerId::from("ghost")))
        );
    }

    #[test]
    fn test_dangling_reference_none_for_consistent_snapshot() {
        let game = Game {
            players: vec![player("a"), player("b")],
            hitler: Some(PlayerId::from("b")),
            presidential_candidate: Some(PlayerId::from("a")),
            ..Game::default()
        };
        assert_eq!(game.dangling_reference(), None);
    }
}
