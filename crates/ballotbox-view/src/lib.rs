//! What each viewer gets to see, phase by phase.
//!
//! Everything here is a pure function of a session and a snapshot. Nothing
//! is cached and nothing is mutated, so the same inputs always produce the
//! same view, and a leak would show up as a failing test rather than as a
//! stale field.
//!
//! # Key items
//!
//! - [`disclose`] / [`reveal_text`]: the hidden-role rules for one viewer
//! - [`tally_ticket`], [`chancellor_candidates`]: election helpers
//! - [`can_start`], [`can_join`], [`needs_join`], [`is_observer`]: lobby rules
//! - [`render`], [`render_hand`], [`render_board`]: phase dispatch
//! - [`ViewError`]: snapshots that reference players they don't contain

mod disclosure;
mod dispatch;
mod error;
mod lobby;

pub use disclosure::{
    Disclosure, HITLER_KNOWS_TEAM_MAX_PLAYERS, TicketTally,
    chancellor_candidates, disclose, pending_votes, reveal_text,
    tally_ticket,
};
pub use dispatch::{
    BallotEntry, BoardView, Candidate, HandView, Rendered, RosterEntry, View,
    render, render_board, render_hand,
};
pub use error::ViewError;
pub use lobby::{
    MAX_PLAYERS, MIN_PLAYERS, can_join, can_start, is_observer, needs_join,
};
