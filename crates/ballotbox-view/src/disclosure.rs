//! Hidden-role disclosure and election arithmetic.
//!
//! [`disclose`] is the one place that decides what a player may learn
//! about other players' roles. It must only ever be asked on behalf of
//! the player it describes: the hand calls it with its own id, and the
//! board never calls it at all.
//!
//! The rules:
//!
//! | Viewer | Table size | Learns |
//! |---|---|---|
//! | Hitler | ≤ 6 | every other fascist, by name |
//! | Hitler | ≥ 7 | nothing beyond "you are Hitler" |
//! | fascist | any | every other fascist by name, and which one is Hitler |
//! | liberal / undealt | any | their own affiliation only |

use std::fmt;

use ballotbox_protocol::{Game, Player, PlayerId, Role, Vote};
use serde::Serialize;

use crate::ViewError;

/// Largest table at which Hitler is shown the fascist team.
pub const HITLER_KNOWS_TEAM_MAX_PLAYERS: usize = 6;

// ---------------------------------------------------------------------------
// Disclosure
// ---------------------------------------------------------------------------

/// What one player is allowed to know about hidden roles.
///
/// Names are copied out of the snapshot so a disclosure can outlive it.
/// `Display` renders the text shown on the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disclosure {
    /// Hitler at a small table: sees the other fascists.
    Hitler { fascists: Vec<String> },

    /// Hitler at a large table: sees no one.
    HitlerAlone,

    /// A fascist who isn't Hitler. `others` excludes Hitler, who is
    /// named separately.
    Fascist { others: Vec<String>, hitler: String },

    /// A liberal, or anyone not yet dealt a role. No names.
    Liberal,
}

impl fmt::Display for Disclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hitler { fascists } if fascists.is_empty() => {
                write!(f, "You're Hitler! There are no other fascists.")
            }
            Self::Hitler { fascists } => write!(
                f,
                "You're Hitler! The other fascists are: {}.",
                fascists.join(", ")
            ),
            Self::HitlerAlone => write!(
                f,
                "You're Hitler! Because this game has {} or more players, \
                 you'll have to guess who the other fascists are.",
                HITLER_KNOWS_TEAM_MAX_PLAYERS + 1
            ),
            Self::Fascist { others, hitler } if others.is_empty() => {
                write!(f, "You're a fascist and Hitler is {hitler}.")
            }
            Self::Fascist { others, hitler } => write!(
                f,
                "You're a fascist. The other fascists are: {}. Hitler is {hitler}.",
                others.join(", ")
            ),
            Self::Liberal => write!(f, "You're a liberal."),
        }
    }
}

/// Computes what `viewer` may learn from `game`.
///
/// Returns `Ok(None)` if `viewer` isn't seated: there is no one to
/// disclose anything to.
///
/// # Errors
/// A non-Hitler fascist must be told who Hitler is. If the snapshot
/// doesn't say, or names someone who isn't seated, this returns
/// [`ViewError::Unassigned`] or [`ViewError::MissingPlayer`].
pub fn disclose(
    viewer: &PlayerId,
    game: &Game,
) -> Result<Option<Disclosure>, ViewError> {
    let Some(me) = game.player(viewer) else {
        return Ok(None);
    };

    let fascists: Vec<&Player> = game
        .players
        .iter()
        .filter(|p| p.role == Some(Role::Fascist) && p.id != me.id)
        .collect();

    if game.hitler.as_ref() == Some(&me.id) {
        if game.players.len() <= HITLER_KNOWS_TEAM_MAX_PLAYERS {
            return Ok(Some(Disclosure::Hitler {
                fascists: names(&fascists),
            }));
        }
        return Ok(Some(Disclosure::HitlerAlone));
    }

    if me.role == Some(Role::Fascist) {
        let hitler_id = game
            .hitler
            .as_ref()
            .ok_or(ViewError::Unassigned { role: "hitler" })?;
        let hitler = game.player(hitler_id).ok_or_else(|| {
            ViewError::MissingPlayer {
                role: "hitler",
                id: hitler_id.clone(),
            }
        })?;
        let others: Vec<&Player> = fascists
            .into_iter()
            .filter(|p| &p.id != hitler_id)
            .collect();
        return Ok(Some(Disclosure::Fascist {
            others: names(&others),
            hitler: hitler.name.clone(),
        }));
    }

    Ok(Some(Disclosure::Liberal))
}

/// The role text for `viewer`'s own hand. See [`disclose`].
pub fn reveal_text(
    viewer: &PlayerId,
    game: &Game,
) -> Result<Option<String>, ViewError> {
    Ok(disclose(viewer, game)?.map(|d| d.to_string()))
}

fn names(players: &[&Player]) -> Vec<String> {
    players.iter().map(|p| p.name.clone()).collect()
}

// ---------------------------------------------------------------------------
// Elections
// ---------------------------------------------------------------------------

/// The outcome of a ticket vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTally {
    pub ja_count: usize,
    /// Strict majority of the whole table. A tie fails.
    pub success: bool,
}

/// Counts `ja` votes against the full table size.
///
/// Players who haven't voted count against the ticket, since the
/// threshold is half the table rather than half the ballots cast.
pub fn tally_ticket(players: &[Player]) -> TicketTally {
    let ja_count = players
        .iter()
        .filter(|p| p.vote == Some(Vote::Ja))
        .count();
    TicketTally {
        ja_count,
        success: ja_count * 2 > players.len(),
    }
}

/// Number of players who haven't voted on the current ticket.
pub fn pending_votes(players: &[Player]) -> usize {
    players.iter().filter(|p| p.vote.is_none()).count()
}

/// Players `viewer` may nominate for chancellor, in seating order.
///
/// Excludes the viewer, the sitting elected president, and the sitting
/// elected chancellor.
pub fn chancellor_candidates<'g>(
    viewer: &PlayerId,
    game: &'g Game,
) -> Vec<&'g Player> {
    game.players
        .iter()
        .filter(|p| {
            &p.id != viewer
                && Some(&p.id) != game.elected_president.as_ref()
                && Some(&p.id) != game.elected_chancellor.as_ref()
        })
        .collect()
}
