//! File-backed progress store
//!
//! One JSON file per game id inside a single directory. The id is used as
//! the file stem verbatim.

use super::codec::{deserialize_state, serialize_state};
use super::store::{ProgressStore, StoreError};
use crate::core::GameState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A store writing each game state to `<dir>/<id>.json`
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use an existing directory as the store root
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the directory (and parents) if needed, then open the store
    ///
    /// # Errors
    /// Returns [`StoreError`] if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory records are kept in
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl ProgressStore for FileStore {
    fn save(&mut self, id: &str, state: &GameState) -> Result<(), StoreError> {
        let record = serialize_state(state)?;
        fs::write(self.path_for(id), record)?;
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<GameState>, StoreError> {
        match fs::read_to_string(self.path_for(id)) {
            Ok(record) => Ok(deserialize_state(&record).ok()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(id)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }
}
