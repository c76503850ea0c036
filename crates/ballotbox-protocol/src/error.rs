//! Error types for the protocol layer.
//!
//! Each crate in ballotbox defines its own error enum. When you see a
//! `ProtocolError`, the problem is in turning frames into bytes or back,
//! not in the network or in what a viewer is allowed to see.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a frame into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a frame).
    ///
    /// Common causes: malformed JSON, a phase name outside the known
    /// vocabulary, or a message `type` this client doesn't understand.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The frame decoded but violates protocol rules.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
