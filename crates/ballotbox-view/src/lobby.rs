//! Pre-game rules: who may start, who still needs a seat, who is watching.

use ballotbox_protocol::{Game, PlayerId};

/// Fewest players the engine will start a game with.
pub const MIN_PLAYERS: usize = 5;

/// Largest table a lobby still counts as joinable.
pub const MAX_PLAYERS: usize = 10;

/// Returns `true` if the start button should be offered.
///
/// The engine re-validates; this only avoids offering a button that is
/// certain to be refused.
pub fn can_start(game: &Game) -> bool {
    !game.is_started && game.players.len() >= MIN_PLAYERS
}

/// Returns `true` if the lobby still has room for another seat.
///
/// Advisory only. Auto-join does not consult it; the engine has the
/// final say on a full table.
pub fn can_join(game: &Game) -> bool {
    !game.is_started && game.players.len() <= MAX_PLAYERS
}

/// Returns `true` if `viewer` should ask for a seat: the game hasn't
/// started and they aren't in it yet.
pub fn needs_join(game: &Game, viewer: &PlayerId) -> bool {
    !game.is_started && !game.has_player(viewer)
}

/// Returns `true` if `viewer` arrived after the game started and so has
/// no seat. Observers see nothing private.
pub fn is_observer(game: &Game, viewer: &PlayerId) -> bool {
    game.is_started && !game.has_player(viewer)
}
