//! Phase dispatch: which view each surface shows for a snapshot.
//!
//! The engine owns every transition; this module only reacts. Each call
//! looks at the snapshot's phase and builds a fresh view, separately for
//! a hand and for the board:
//!
//! | Phase | Hand | Board |
//! |---|---|---|
//! | not started | `Lobby` | `Waiting` |
//! | `VIEW_ROLES` | `RevealRole` | `Roster` |
//! | `ELECTION_START` | `PickChancellor` (candidate only) | `Election` |
//! | `VOTE_ON_TICKET` | `Vote` | `VotePending` |
//! | `REVEAL_TICKET_RESULTS` | `Idle` | `TicketResult` |
//! | `LEGISLATIVE_SESSION_START` | `Idle` | `LegislativeSession` |
//! | anything else | `Idle` | `Waiting` |
//!
//! Both `match` statements over [`Phase`] list every variant with no
//! wildcard arm, so a phase added to the protocol won't compile until
//! both surfaces decide what to do with it.

use ballotbox_protocol::{Game, Phase, Player, PlayerId, Vote};
use ballotbox_session::{ClientRole, Session};
use serde::Serialize;

use crate::{
    TicketTally, ViewError, can_start, chancellor_candidates, is_observer,
    pending_votes, reveal_text, tally_ticket,
};

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A player who can be nominated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: PlayerId,
    pub name: String,
}

/// What a hand shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandView {
    /// Nothing to do: no snapshot yet, not seated yet, or a phase with
    /// no hand interaction.
    Idle,

    /// Arrived after the game started; no seat, no private info.
    Observer,

    /// Before the game: edit your name, and start once enough players
    /// have joined.
    Lobby { name: String, can_start: bool },

    /// Roles are out. `revealed` holds the role text once this player has
    /// asked to see it.
    RevealRole { revealed: Option<String> },

    /// This player is the presidential candidate and must nominate.
    PickChancellor { candidates: Vec<Candidate> },

    /// Ja or nein on the current ticket. `current` is the vote the engine
    /// has on record for this player.
    Vote { current: Option<Vote> },
}

/// One line of the board's role roster. Deliberately has no role field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub seen_role: bool,
}

/// One line of the board's vote reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallotEntry {
    pub name: String,
    pub vote: Option<Vote>,
}

/// What the board shows. Only public information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    /// Before the game, or a phase with nothing public to show.
    Waiting,

    /// Who has looked at their role yet.
    Roster { players: Vec<RosterEntry> },

    /// Waiting on the presidential candidate's nomination.
    Election { presidential_candidate: String },

    /// How many players still have to vote.
    VotePending { pending: usize },

    /// The ticket result and every ballot.
    TicketResult {
        tally: TicketTally,
        ballots: Vec<BallotEntry>,
    },

    /// The elected government.
    LegislativeSession { president: String, chancellor: String },
}

/// Either surface's view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Hand(HandView),
    Board(BoardView),
}

/// A view plus, in debug sessions, a raw dump of what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub view: View,
    pub debug_dump: Option<String>,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Renders the view for this session's surface.
///
/// # Errors
/// Propagates [`ViewError`] from the surface renderers.
pub fn render(
    session: &Session,
    game: Option<&Game>,
) -> Result<Rendered, ViewError> {
    tracing::debug!(
        role = %session.role(),
        phase = ?game.and_then(|g| g.phase.name),
        "rendering snapshot"
    );

    let view = match session.role() {
        ClientRole::Hand => View::Hand(render_hand(session, game)?),
        ClientRole::Board => View::Board(render_board(game)?),
    };

    let debug_dump = session.debug().then(|| debug_dump(session, game)).flatten();

    Ok(Rendered { view, debug_dump })
}

/// Renders a hand.
///
/// Sessions without a player id (boards) and viewers not seated in an
/// unstarted game get [`HandView::Idle`]; the auto-join rule takes care
/// of seating them.
///
/// # Errors
/// [`ViewError`] if the viewer's own role text can't be computed (a
/// fascist whose snapshot doesn't resolve Hitler).
pub fn render_hand(
    session: &Session,
    game: Option<&Game>,
) -> Result<HandView, ViewError> {
    let (Some(viewer), Some(game)) = (session.player_id(), game) else {
        return Ok(HandView::Idle);
    };

    if is_observer(game, viewer) {
        return Ok(HandView::Observer);
    }
    let Some(me) = game.player(viewer) else {
        return Ok(HandView::Idle);
    };

    if !game.is_started {
        return Ok(HandView::Lobby {
            name: me.name.clone(),
            can_start: can_start(game),
        });
    }

    let Some(phase) = game.phase.name else {
        return Ok(HandView::Idle);
    };

    let view = match phase {
        Phase::ViewRoles => {
            let revealed = if me.reveal_role {
                reveal_text(viewer, game)?
            } else {
                None
            };
            HandView::RevealRole { revealed }
        }
        Phase::ElectionStart => {
            if game.presidential_candidate.as_ref() == Some(viewer) {
                let candidates = chancellor_candidates(viewer, game)
                    .into_iter()
                    .map(|p| Candidate {
                        id: p.id.clone(),
                        name: p.name.clone(),
                    })
                    .collect();
                HandView::PickChancellor { candidates }
            } else {
                HandView::Idle
            }
        }
        Phase::VoteOnTicket => HandView::Vote { current: me.vote },
        Phase::RevealTicketResults
        | Phase::LegislativeSessionStart
        | Phase::SelectChancellorCandidate
        | Phase::TicketFail
        | Phase::ExecutionActionPhase => HandView::Idle,
    };

    Ok(view)
}

/// Renders the board.
///
/// # Errors
/// [`ViewError`] when the phase needs an office holder (the presidential
/// candidate during an election, the elected pair during a legislative
/// session) that the snapshot doesn't resolve.
pub fn render_board(game: Option<&Game>) -> Result<BoardView, ViewError> {
    let Some(game) = game else {
        return Ok(BoardView::Waiting);
    };
    if !game.is_started {
        return Ok(BoardView::Waiting);
    }
    let Some(phase) = game.phase.name else {
        return Ok(BoardView::Waiting);
    };

    let view = match phase {
        Phase::ViewRoles => BoardView::Roster {
            players: game
                .players
                .iter()
                .map(|p| RosterEntry {
                    name: p.name.clone(),
                    seen_role: p.seen_role,
                })
                .collect(),
        },
        Phase::ElectionStart => {
            let candidate = require(
                game,
                "presidential candidate",
                game.presidential_candidate.as_ref(),
            )?;
            BoardView::Election {
                presidential_candidate: candidate.name.clone(),
            }
        }
        Phase::VoteOnTicket => BoardView::VotePending {
            pending: pending_votes(&game.players),
        },
        Phase::RevealTicketResults => BoardView::TicketResult {
            tally: tally_ticket(&game.players),
            ballots: game
                .players
                .iter()
                .map(|p| BallotEntry {
                    name: p.name.clone(),
                    vote: p.vote,
                })
                .collect(),
        },
        Phase::LegislativeSessionStart => {
            let president = require(
                game,
                "elected president",
                game.elected_president.as_ref(),
            )?;
            let chancellor = require(
                game,
                "elected chancellor",
                game.elected_chancellor.as_ref(),
            )?;
            BoardView::LegislativeSession {
                president: president.name.clone(),
                chancellor: chancellor.name.clone(),
            }
        }
        Phase::SelectChancellorCandidate
        | Phase::TicketFail
        | Phase::ExecutionActionPhase => BoardView::Waiting,
    };

    Ok(view)
}

/// Resolves an office holder the current phase can't render without.
fn require<'g>(
    game: &'g Game,
    role: &'static str,
    id: Option<&PlayerId>,
) -> Result<&'g Player, ViewError> {
    let id = id.ok_or(ViewError::Unassigned { role })?;
    game.player(id).ok_or_else(|| ViewError::MissingPlayer {
        role,
        id: id.clone(),
    })
}

#[derive(Serialize)]
struct DebugState<'a> {
    session: &'a Session,
    game: Option<&'a Game>,
}

fn debug_dump(session: &Session, game: Option<&Game>) -> Option<String> {
    match serde_json::to_string_pretty(&DebugState { session, game }) {
        Ok(dump) => Some(dump),
        Err(e) => {
            tracing::warn!(error = %e, "could not build debug dump");
            None
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
