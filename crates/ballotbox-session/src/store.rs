//! Persistence hook for a hand's stable player id.
//!
//! A hand must come back as the same player after a reload or a dropped
//! connection, so the id it resolves on first launch is written somewhere
//! durable. Where that is depends on the device, which is why this is a
//! trait:
//! - [`FileIdentityStore`] for terminals and desktop hands
//! - [`MemoryIdentityStore`] for tests and throwaway devices
//!
//! Exactly one value is persisted, under the key `playerId`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::SessionError;

/// Loads and saves this device's player id.
pub trait IdentityStore {
    /// Returns the previously saved id, if any.
    ///
    /// Implementations degrade to `None` on read failures rather than
    /// erroring: a lost id just means a fresh one is generated.
    fn load(&self) -> Option<String>;

    /// Saves `player_id` for the next connection.
    ///
    /// # Errors
    /// Returns [`SessionError::Storage`] if the write fails.
    fn store(&mut self, player_id: &str) -> Result<(), SessionError>;
}

// ---------------------------------------------------------------------------
// MemoryIdentityStore
// ---------------------------------------------------------------------------

/// Keeps the id in memory. Forgotten when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityStore {
    player_id: Option<String>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `player_id`, as if from a prior run.
    pub fn with_player_id(player_id: impl Into<String>) -> Self {
        Self {
            player_id: Some(player_id.into()),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Option<String> {
        self.player_id.clone()
    }

    fn store(&mut self, player_id: &str) -> Result<(), SessionError> {
        self.player_id = Some(player_id.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileIdentityStore
// ---------------------------------------------------------------------------

/// On-disk shape: `{"playerId": "..."}`.
#[derive(Serialize, Deserialize)]
struct StoredIdentity {
    #[serde(rename = "playerId")]
    player_id: String,
}

/// Keeps the id in a small JSON file.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file, distinguishing "nothing saved yet" (`Ok(None)`)
    /// from a file that can't be used.
    ///
    /// # Errors
    /// - [`SessionError::Storage`]: the file exists but can't be read
    /// - [`SessionError::Corrupt`]: not JSON, or an empty id
    pub fn read(&self) -> Result<Option<String>, SessionError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Storage(e)),
        };
        let stored: StoredIdentity = serde_json::from_slice(&bytes)
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        if stored.player_id.is_empty() {
            return Err(SessionError::Corrupt("empty playerId".into()));
        }
        Ok(Some(stored.player_id))
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Option<String> {
        match self.read() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring unreadable identity file"
                );
                None
            }
        }
    }

    fn store(&mut self, player_id: &str) -> Result<(), SessionError> {
        let stored = StoredIdentity {
            player_id: player_id.to_string(),
        };
        let bytes = serde_json::to_vec(&stored)
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(SessionError::Storage)?;
            }
        }
        fs::write(&self.path, bytes).map_err(SessionError::Storage)?;
        tracing::debug!(path = %self.path.display(), "player id persisted");
        Ok(())
    }
}
