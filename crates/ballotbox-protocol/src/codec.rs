//! Codec trait and implementations for serializing/deserializing frames.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The client doesn't care HOW frames are serialized: it just needs
//! something that implements the [`Codec`] trait.
//!
//! The game engine speaks JSON, so [`JsonCodec`] is the only codec we
//! ship. The trait stays so tests and alternative engines can plug in
//! their own.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// `DeserializeOwned` (vs plain `Deserialize`) means the decoded value
/// owns its data, so the receive buffer can be dropped right after
/// decoding. Snapshots outlive the frame that carried them.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use ballotbox_protocol::{
///     ClientFrame, ClientMessage, Codec, JsonCodec, PlayerId,
/// };
///
/// let codec = JsonCodec;
///
/// let frame = ClientFrame::Message(ClientMessage::RevealRole {
///     player_id: PlayerId::from("p1"),
/// });
///
/// let bytes = codec.encode(&frame).unwrap();
/// let text = String::from_utf8(bytes.clone()).unwrap();
/// assert!(text.contains("\"REVEAL_ROLE\""));
///
/// let decoded: ClientFrame = codec.decode(&bytes).unwrap();
/// assert_eq!(frame, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
