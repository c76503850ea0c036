//! Error types for the view layer.

use ballotbox_protocol::PlayerId;

/// A snapshot that can't be rendered honestly.
///
/// Both variants mean the engine sent a snapshot whose references don't
/// line up with its own player list. Rendering a placeholder name instead
/// would hide an engine bug, so the affected render path fails.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The phase needs an office holder but the snapshot names nobody.
    #[error("snapshot has no {role}")]
    Unassigned { role: &'static str },

    /// The snapshot names an office holder who isn't seated.
    #[error("{role} {id} is not among the players")]
    MissingPlayer { role: &'static str, id: PlayerId },
}
