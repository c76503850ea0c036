//! Wire protocol for ballotbox.
//!
//! This crate defines the "language" spoken between a game client (a
//! player's hand or the shared board) and the external game engine:
//!
//! - **Types** ([`Game`], [`Player`], [`Policy`], [`Phase`], etc.) :
//!   the snapshot the engine pushes on every state change.
//! - **Messages** ([`ClientMessage`], [`ServerMessage`]) and the frames
//!   that carry them ([`ClientFrame`], [`ServerFrame`]).
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how frames are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]): what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer has no behavior. It doesn't know who is looking at
//! a snapshot or what they may see: that lives in `ballotbox-view`.
//!
//! ```text
//! Transport (bytes) → Protocol (frames) → Client (session + snapshot)
//! ```

mod codec;
mod error;
mod message;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use message::{ClientFrame, ClientMessage, ServerFrame, ServerMessage};
pub use types::{
    Game, Phase, PhaseStamp, Player, PlayerId, Policy, PolicyKind,
    PolicyLocation, Role, Vote,
};
