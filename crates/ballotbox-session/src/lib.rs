//! Client session bootstrap for ballotbox.
//!
//! A session is decided once, when the connection opens, and never
//! changes afterwards:
//!
//! 1. **Role**: is this device a player's private *hand* or the shared
//!    public *board*? ([`ClientRole`])
//! 2. **Identity**: which player is holding this hand? Resolved from an
//!    explicit override, a previously persisted id, or a fresh random
//!    token ([`IdentityStore`]).
//! 3. **Switches**: connection-time flags such as debug dumps
//!    ([`QueryParams`]).
//!
//! # How it fits in the stack
//!
//! ```text
//! View Layer (above)  ← reads the session to decide what a viewer sees
//!     ↕
//! Session Layer (this crate)  ← who is looking, and on which surface
//!     ↕
//! Protocol Layer (below)  ← provides PlayerId
//! ```

mod bootstrap;
mod error;
mod query;
mod session;
mod store;

pub use bootstrap::{bootstrap, generate_token, is_mobile};
pub use error::SessionError;
pub use query::QueryParams;
pub use session::{ClientRole, Session};
pub use store::{FileIdentityStore, IdentityStore, MemoryIdentityStore};
