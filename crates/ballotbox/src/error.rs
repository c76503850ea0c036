//! Unified error type for the ballotbox client.

use ballotbox_protocol::ProtocolError;
use ballotbox_session::SessionError;
use ballotbox_transport::TransportError;
use ballotbox_view::ViewError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `ballotbox` crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant generates a `From` impl, so `?` converts
/// sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum BallotError {
    /// The connection to the engine failed or closed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A frame couldn't be encoded, or an outbound message was invalid.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The device identity couldn't be read or written.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A snapshot referenced a player it doesn't contain.
    #[error(transparent)]
    View(#[from] ViewError),

    /// The engine reported a protocol fault. Not recoverable.
    #[error("engine fault: {0}")]
    ServerFault(String),
}
