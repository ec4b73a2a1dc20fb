//! Progress store contract

use crate::core::GameState;
use std::fmt;
use std::io;

/// Error type for store operations
///
/// Parse failures are not errors at this boundary: a record that fails to
/// deserialize is reported as absent by [`ProgressStore::load`].
#[derive(Debug)]
pub enum StoreError {
    /// Underlying I/O failure
    Io(io::Error),
    /// A state could not be serialized for writing
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store I/O error: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize game state: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// Keyed persistence for game states
///
/// The contract is round-trip fidelity: `load` after `save` with the same
/// id returns a state equal to what was saved. A stored record that fails
/// to deserialize surfaces as `None`, never as an error; deleting an
/// absent id succeeds.
pub trait ProgressStore {
    /// Persist a state under an opaque identifier
    ///
    /// # Errors
    /// Returns [`StoreError`] when the state cannot be serialized or the
    /// backing medium rejects the write.
    fn save(&mut self, id: &str, state: &GameState) -> Result<(), StoreError>;

    /// Load the state stored under `id`, if any
    ///
    /// # Errors
    /// Returns [`StoreError`] only for backing-medium failures; a missing
    /// or unparseable record is `Ok(None)`.
    fn load(&self, id: &str) -> Result<Option<GameState>, StoreError>;

    /// Remove the record stored under `id`
    ///
    /// # Errors
    /// Returns [`StoreError`] for backing-medium failures; removing an
    /// absent id is not an error.
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;

    /// All identifiers currently stored, sorted
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backing medium cannot be listed.
    fn list_ids(&self) -> Result<Vec<String>, StoreError>;
}
