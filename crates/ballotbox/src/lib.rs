//! # ballotbox
//!
//! Hand and board client for a hidden-role voting game.
//!
//! The game itself runs in an external engine. This crate connects to
//! it, keeps the latest snapshot the engine pushed, shows each viewer only
//! what they are allowed to see, and sends the player's actions back.
//!
//! ```text
//!   bootstrap ──→ Session ──┐
//!                           ▼
//!   engine ⇄ Connection ⇄ drive ⇄ Client ──→ render ──→ your UI
//!                           ▲
//!   your UI ──→ Intent ─────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ballotbox::prelude::*;
//! use tokio::sync::mpsc;
//!
//! # async fn run() -> Result<(), BallotError> {
//! let params = QueryParams::parse("?isHand=true");
//! let mut store = MemoryIdentityStore::new();
//! let session = bootstrap(&params, &mut store, "Mozilla/5.0 (iPhone)");
//!
//! let conn = WebSocketConnection::connect("ws://127.0.0.1:3000").await?;
//! let (_intents_tx, mut intents) = mpsc::channel::<Intent>(16);
//! let mut client = Client::new(session);
//!
//! drive(&conn, &JsonCodec, &mut client, &mut intents, |rendered| {
//!     println!("{:?}", rendered.view);
//! })
//! .await
//! # }
//! ```

mod client;
mod config;
mod driver;
mod emitter;
mod error;

pub use client::Client;
pub use config::{
    CliArgs, ClientConfig, DEFAULT_IDENTITY_PATH, DEFAULT_URL,
    DEFAULT_USER_AGENT,
};
pub use driver::drive;
pub use emitter::{Intent, Rejection, emit, validate};
pub use error::BallotError;

/// Installs a `tracing` subscriber that prints to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this
/// twice is harmless: the second call leaves the first subscriber in place.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Everything a client application needs, in one import.
pub mod prelude {
    pub use crate::{
        BallotError, CliArgs, Client, ClientConfig, Intent, Rejection, drive,
        emit, init_tracing, validate,
    };
    pub use ballotbox_protocol::{
        ClientMessage, Codec, Game, JsonCodec, Phase, Player, PlayerId, Role,
        ServerFrame, ServerMessage, Vote,
    };
    pub use ballotbox_session::{
        ClientRole, FileIdentityStore, IdentityStore, MemoryIdentityStore,
        QueryParams, Session, bootstrap, is_mobile,
    };
    pub use ballotbox_transport::{
        ChannelConnection, Connection, WebSocketConnection,
    };
    pub use ballotbox_view::{
        BallotEntry, BoardView, Candidate, HandView, Rendered, RosterEntry,
        TicketTally, View, ViewError,
    };
}
