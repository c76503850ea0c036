//! Connections between a ballotbox client and the game engine.
//!
//! The client only ever holds one connection, so there is no listener
//! side here: just the [`Connection`] trait and two implementations.
//!
//! - [`WebSocketConnection`] dials the engine over `ws://` or `wss://`
//! - [`ChannelConnection`] is an in-process pair for tests and embedding
//!
//! # Feature Flags
//!
//! - `websocket` (default): WebSocket connections via `tokio-tungstenite`

#![allow(async_fn_in_trait)]

mod channel;
mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use channel::ChannelConnection;
pub use error::TransportError;
#[cfg(feature = "websocket")]
pub use websocket::WebSocketConnection;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier for a connection, used to tell them apart in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Creates a new `ConnectionId` from a raw `u64`.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocates an id no other connection in this process has.
    pub fn next() -> Self {
        Self(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// A single connection that carries encoded frames both ways.
///
/// Frames are whole messages: one `send` is one `recv` on the other side.
/// `send` and `recv` take `&self` so a driver can wait on a receive while
/// also sending.
pub trait Connection: Send + Sync + 'static {
    /// The error type for connection operations.
    type Error: std::error::Error + Send + Sync;

    /// Sends one frame to the engine.
    async fn send(&self, data: &[u8]) -> Result<(), Self::Error>;

    /// Receives the next frame from the engine.
    ///
    /// Returns `Ok(None)` when the connection is cleanly closed.
    async fn recv(&self) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Closes the connection.
    async fn close(&self) -> Result<(), Self::Error>;

    /// Returns the unique identifier for this connection.
    fn id(&self) -> ConnectionId;
}
