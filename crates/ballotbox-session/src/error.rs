//! Error types for the session layer.

/// Errors that can occur while loading or persisting a device identity.
///
/// None of these stop a session from starting: bootstrap logs them and
/// carries on with whatever id it resolved.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading or writing the identity file failed.
    #[error("identity storage failed: {0}")]
    Storage(#[source] std::io::Error),

    /// The identity file exists but doesn't hold a usable id.
    #[error("identity file is corrupt: {0}")]
    Corrupt(String),
}
